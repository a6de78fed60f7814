use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Diagnostic)]
pub enum TinctError {
    #[diagnostic(code(tinct::color), url(docsrs))]
    InvalidColorFormat {
        #[source_code]
        src: String,
        #[label("not a valid hex color")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(tinct::seed), url(docsrs))]
    MissingField { field: String },

    #[diagnostic(code(tinct::registry), url(docsrs))]
    InvalidRegistry {
        #[source_code]
        src: String,
        #[label("registry parse failed here")]
        err_span: SourceSpan,
        msg: String,
    },
}

pub type TinctResult<T> = miette::Result<T>;

impl Display for TinctError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TinctError::InvalidColorFormat { msg, .. } => write!(f, "Invalid color: {}", msg),
            TinctError::MissingField { field } => {
                write!(f, "Missing required field `{}`", field)
            }
            TinctError::InvalidRegistry { msg, .. } => write!(f, "Invalid registry: {}", msg),
        }
    }
}

impl Error for TinctError {}

impl TinctError {
    pub fn color(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidColorFormat {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn registry(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidRegistry {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }
}
