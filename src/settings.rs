use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::Capacity;
use crate::error::BatchError;

/// Property keys, named as the pipeline host names them
pub mod keys {
    pub const EXE_FASTQC: &str = "exe.fastqc";
    pub const EXE_FASTQC_PARAMS: &str = "exe.fastqcParams";
    pub const NUM_THREADS: &str = "script.numThreads";
    pub const BATCH_SIZE: &str = "fastqc.batchSize";
    pub const OUTPUT_DIR: &str = "output.dir";
    pub const TEMP_DIR: &str = "temp.dir";
    pub const SINGLE_BATCH: &str = "script.singleBatch";
}

pub const DEFAULT_EXECUTABLE: &str = "fastqc";

/// Property file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(rename = "exe.fastqc", default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
    #[serde(rename = "exe.fastqcParams", default)]
    pub params: Vec<String>,
    #[serde(rename = "script.numThreads", default, skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<i64>,
    #[serde(rename = "fastqc.batchSize", default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i64>,
    #[serde(rename = "output.dir", default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(rename = "temp.dir", default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
    /// Put every input in one batch regardless of thread count
    #[serde(rename = "script.singleBatch", default)]
    pub single_batch: bool,
}

impl Settings {
    /// Load settings from a JSON property file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read settings file: {}", path.display()))?;
        Self::from_json(&raw).context(format!("Invalid settings file: {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse settings JSON")
    }

    pub fn executable(&self) -> &str {
        self.executable.as_deref().unwrap_or(DEFAULT_EXECUTABLE)
    }

    /// Validated thread count
    pub fn num_threads(&self) -> Result<usize, BatchError> {
        let n = self
            .num_threads
            .ok_or(BatchError::MissingSetting(keys::NUM_THREADS))?;
        match Capacity::bounded(n)? {
            Capacity::Bounded(threads) => Ok(threads.get()),
            Capacity::Unbounded => Err(BatchError::InvalidCapacity(n)),
        }
    }

    pub fn capacity(&self) -> Result<Capacity, BatchError> {
        let n = self
            .num_threads
            .ok_or(BatchError::MissingSetting(keys::NUM_THREADS))?;
        Capacity::from_threads(n, self.single_batch)
    }

    pub fn output_dir(&self) -> Result<&Path, BatchError> {
        let dir = self
            .output_dir
            .as_deref()
            .ok_or(BatchError::MissingSetting(keys::OUTPUT_DIR))?;
        require_utf8(dir)
    }

    pub fn temp_dir(&self) -> Result<&Path, BatchError> {
        let dir = self
            .temp_dir
            .as_deref()
            .ok_or(BatchError::MissingSetting(keys::TEMP_DIR))?;
        require_utf8(dir)
    }

    /// Check required keys and positive integers
    pub fn validate(&self) -> Result<(), BatchError> {
        self.num_threads()?;
        if let Some(size) = self.batch_size {
            Capacity::bounded(size)?;
        }
        self.output_dir()?;
        self.temp_dir()?;
        Ok(())
    }

    /// Advice logged when the script batch size works against multi-threading
    pub fn efficiency_advice(&self) -> Option<String> {
        let batch_size = self.batch_size?;
        let threads = self.num_threads?;
        if batch_size == 1 || threads <= 1 {
            return None;
        }

        Some(format!(
            "FastQC runs most efficiently when {} is set to 1 (currently [{}]). \
             Each node processes [{}] files at a time because of the [{}] parameter.",
            keys::BATCH_SIZE,
            batch_size,
            threads,
            keys::NUM_THREADS
        ))
    }
}

/// Directories are rendered verbatim into commands
fn require_utf8(path: &Path) -> Result<&Path, BatchError> {
    match path.to_str() {
        Some(_) => Ok(path),
        None => Err(BatchError::NonUtf8Path(path.to_path_buf())),
    }
}
