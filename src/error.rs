use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid module option ({flag}) found in property ({config_key}). {source_hint}")]
    Collision {
        flag: String,
        config_key: String,
        source_hint: String,
    },

    #[error("Batch capacity must be a positive integer (got {0})")]
    InvalidCapacity(i64),

    #[error("Input path is not absolute: {}", .0.display())]
    RelativeInput(PathBuf),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),
}
