use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The persisted text is not a well-formed tree record
    #[error("Malformed tree record: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Failed to access tree file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    pub(crate) fn negative(name: &'static str, value: i64) -> Self {
        TreeError::InvalidArgument {
            name,
            reason: format!("must not be negative, got {}", value),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Convert a signed caller-supplied count into a `usize`, rejecting negatives
pub(crate) fn non_negative(name: &'static str, value: i64) -> TreeResult<usize> {
    usize::try_from(value).map_err(|_| TreeError::negative(name, value))
}
