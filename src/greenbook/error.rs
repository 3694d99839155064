use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenbookError {
    #[error("{0}")]
    Validation(String),

    #[error("Customer with ID {0} not found")]
    NotFound(u64),

    #[error("Malformed store {}: {reason}", .path.display())]
    MalformedStore { path: PathBuf, reason: String },

    #[error("Could not write store {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreenbookError>;
