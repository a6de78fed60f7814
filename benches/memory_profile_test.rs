use std::time::Instant;
use tinct::{create_theme, to_css, validate_and_fix, Level, ThemeInput};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Debug, Default)]
struct MemoryMetrics {
    total_bytes: u64,
    current_bytes: usize,
    total_blocks: u64,
    current_blocks: usize,
    peak_bytes: usize,
    peak_blocks: usize,
}

impl MemoryMetrics {
    fn from_heap_stats(stats: &dhat::HeapStats) -> Self {
        Self {
            total_bytes: stats.total_bytes,
            current_bytes: stats.curr_bytes,
            total_blocks: stats.total_blocks,
            current_blocks: stats.curr_blocks,
            peak_bytes: stats.max_bytes,
            peak_blocks: stats.max_blocks,
        }
    }

    fn diff(&self, other: &Self) -> Self {
        Self {
            total_bytes: self.total_bytes.saturating_sub(other.total_bytes),
            current_bytes: self.current_bytes.saturating_sub(other.current_bytes),
            total_blocks: self.total_blocks.saturating_sub(other.total_blocks),
            current_blocks: self.current_blocks.saturating_sub(other.current_blocks),
            peak_bytes: self.peak_bytes.max(other.peak_bytes),
            peak_blocks: self.peak_blocks.max(other.peak_blocks),
        }
    }
}

fn print_metrics(name: &str, metrics: &MemoryMetrics) {
    println!("\n=== {} ===", name);
    println!(
        "Total allocated: {} bytes ({} blocks)",
        metrics.total_bytes, metrics.total_blocks
    );
    println!(
        "Current memory: {} bytes ({} blocks)",
        metrics.current_bytes, metrics.current_blocks
    );
    println!(
        "Peak memory: {} bytes ({} blocks)",
        metrics.peak_bytes, metrics.peak_blocks
    );
}

fn example_input(i: usize) -> ThemeInput {
    // Cycle hues so each iteration exercises a different resolver path.
    let hue = (i * 37) % 360;
    let primary = tinct::Color::from_hsl(hue as f32, 80.0, 50.0);
    ThemeInput::new(format!("profile-{i}"), format!("Profile {i}"), "bench", primary.to_hex())
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();
    println!("🔍 Starting memory profile analysis...\n");

    let baseline = MemoryMetrics::from_heap_stats(&dhat::HeapStats::get());
    print_metrics("Baseline", &baseline);

    for count in [100, 1000] {
        println!("\n📊 Generating {} themes", count);
        let before = MemoryMetrics::from_heap_stats(&dhat::HeapStats::get());
        let start = Instant::now();

        let mut css_bytes = 0usize;
        for i in 0..count {
            let theme = create_theme(&example_input(i)).expect("seed inputs are valid");
            let outcome = validate_and_fix(&theme, Level::AAA);
            css_bytes += to_css(&outcome.theme).len();
        }

        let elapsed = start.elapsed();
        let after = MemoryMetrics::from_heap_stats(&dhat::HeapStats::get());
        let impact = after.diff(&before);

        print_metrics("Generation Impact", &impact);
        println!(
            "Per theme: {:.2} bytes allocated, {:.2} µs",
            impact.total_bytes as f64 / count as f64,
            elapsed.as_micros() as f64 / count as f64
        );
        println!("CSS emitted: {} bytes total", css_bytes);
    }

    let final_stats = MemoryMetrics::from_heap_stats(&dhat::HeapStats::get());
    print_metrics("Final", &final_stats);
}
