use crate::error::BatchError;
use std::fmt;
use std::path::{Path, PathBuf};

/// One unit of work: an absolute path to a sequence file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputItem {
    path: PathBuf,
}

impl InputItem {
    /// Wrap an absolute path. Relative and non-UTF-8 paths are rejected.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, BatchError> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(BatchError::RelativeInput(path));
        }
        if path.to_str().is_none() {
            return Err(BatchError::NonUtf8Path(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as written into commands; always valid UTF-8
    pub fn as_str(&self) -> &str {
        self.path.to_str().unwrap_or_default()
    }
}

impl fmt::Display for InputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
