//! FastQC profile: with n threads FastQC processes n files at once when they
//! are passed on a single command line, so batch capacity tracks the thread count.

use tracing::info;

use crate::batch::InputItem;
use crate::command::{BatchConfig, RenderedCommand, build_commands};
use crate::error::BatchError;
use crate::flags::{ReservedFlag, validate_no_reserved_flags};
use crate::settings::{Settings, keys};

pub const NUM_THREADS_PARAM: &str = "--threads";
pub const NUM_THREADS_PARAM_SHORT: &str = "-t ";
pub const OUTPUT_PARAM: &str = "--outdir ";
pub const OUTPUT_PARAM_SHORT: &str = "-o ";
pub const TEMP_DIR_PARAM: &str = "--dir ";
pub const TEMP_DIR_PARAM_SHORT: &str = "-d ";

/// Flags FastQC must not receive through `exe.fastqcParams`
pub fn reserved_flags() -> Vec<ReservedFlag> {
    vec![
        ReservedFlag::derived(NUM_THREADS_PARAM, keys::NUM_THREADS),
        ReservedFlag::derived(NUM_THREADS_PARAM_SHORT, keys::NUM_THREADS),
        ReservedFlag::supplied(OUTPUT_PARAM),
        ReservedFlag::supplied(OUTPUT_PARAM_SHORT),
        ReservedFlag::supplied(TEMP_DIR_PARAM),
        ReservedFlag::supplied(TEMP_DIR_PARAM_SHORT),
    ]
}

pub struct FastQc {
    config: BatchConfig,
}

impl FastQc {
    /// Resolve settings into a command template
    pub fn from_settings(settings: &Settings) -> Result<Self, BatchError> {
        let threads = settings.num_threads()?;
        let config = BatchConfig::builder(
            settings.executable(),
            settings.output_dir()?,
            settings.temp_dir()?,
            settings.capacity()?,
        )
        .extra_flags(settings.params.iter().cloned())
        .output_flag(OUTPUT_PARAM.trim_end())
        .temp_flag(TEMP_DIR_PARAM.trim_end())
        .thread_flag(NUM_THREADS_PARAM, threads)
        .build();

        Ok(Self { config })
    }

    /// Verify settings and that no derived flag is also set by the user
    pub fn check_dependencies(settings: &Settings) -> Result<(), BatchError> {
        settings.validate()?;
        validate_no_reserved_flags(&settings.params, &reserved_flags(), keys::EXE_FASTQC_PARAMS)?;

        if let Some(advice) = settings.efficiency_advice() {
            info!("{}", advice);
        }
        Ok(())
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// One command line per batch
    pub fn commands(&self, files: &[InputItem]) -> Result<Vec<RenderedCommand>, BatchError> {
        build_commands(files, &self.config, &reserved_flags(), keys::EXE_FASTQC_PARAMS)
    }

    /// Worker script lines as nested groups, one single-line group per batch
    pub fn build_script(&self, files: &[InputItem]) -> Result<Vec<Vec<String>>, BatchError> {
        Ok(self
            .commands(files)?
            .into_iter()
            .map(|command| vec![command.into_string()])
            .collect())
    }
}
