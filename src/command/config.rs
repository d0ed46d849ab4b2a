use crate::batch::Capacity;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FLAG: &str = "--outdir";
pub const DEFAULT_TEMP_FLAG: &str = "--dir";

/// Command template and batch capacity for one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub executable: String,
    pub extra_flags: Vec<String>,
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub capacity: Capacity,
    pub output_flag: String,
    pub temp_flag: String,
    /// Derived thread flag and its value, e.g. ("--threads", 4)
    pub thread_flag: Option<(String, usize)>,
}

impl BatchConfig {
    pub fn builder(
        executable: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
        capacity: Capacity,
    ) -> BatchConfigBuilder {
        BatchConfigBuilder::new(executable, output_dir, temp_dir, capacity)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }
}

/// Mutable builder for a [`BatchConfig`]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn new(
        executable: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
        capacity: Capacity,
    ) -> Self {
        Self {
            config: BatchConfig {
                executable: executable.into(),
                extra_flags: Vec::new(),
                output_dir: output_dir.into(),
                temp_dir: temp_dir.into(),
                capacity,
                output_flag: DEFAULT_OUTPUT_FLAG.to_string(),
                temp_flag: DEFAULT_TEMP_FLAG.to_string(),
                thread_flag: None,
            },
        }
    }

    /// Append user-supplied flags, kept in the given order
    pub fn extra_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extra_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    pub fn output_flag(mut self, flag: impl Into<String>) -> Self {
        self.config.output_flag = flag.into();
        self
    }

    pub fn temp_flag(mut self, flag: impl Into<String>) -> Self {
        self.config.temp_flag = flag.into();
        self
    }

    /// Inject a derived thread-count flag after the extra flags
    pub fn thread_flag(mut self, flag: impl Into<String>, threads: usize) -> Self {
        self.config.thread_flag = Some((flag.into(), threads));
        self
    }

    pub fn build(self) -> BatchConfig {
        self.config
    }
}
