use super::BatchConfig;
use crate::batch::{Batch, InputItem, plan};
use crate::error::BatchError;
use crate::flags::{ReservedFlag, validate_no_reserved_flags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single shell command line covering one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedCommand(String);

impl RenderedCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render one command line:
/// `<exe> [flags] [thread-flag n] <out-flag> <out-dir> <temp-flag> <temp-dir> <items...>`
///
/// Paths are written as-is; nothing is quoted or escaped.
pub fn render(batch: &Batch<'_>, config: &BatchConfig) -> RenderedCommand {
    let mut parts: Vec<String> = Vec::with_capacity(8 + batch.len());

    parts.push(config.executable.clone());
    parts.extend(
        config
            .extra_flags
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string),
    );
    if let Some((flag, threads)) = &config.thread_flag {
        parts.push(format!("{} {}", flag, threads));
    }
    parts.push(config.output_flag.clone());
    parts.push(config.output_dir.display().to_string());
    parts.push(config.temp_flag.clone());
    parts.push(config.temp_dir.display().to_string());
    parts.extend(batch.items().iter().map(|item| item.as_str().to_string()));

    RenderedCommand(parts.join(" "))
}

/// Validate flags, plan batches and render every command.
///
/// Either all commands are returned or none are.
pub fn build_commands(
    inputs: &[InputItem],
    config: &BatchConfig,
    reserved: &[ReservedFlag],
    config_key: &str,
) -> Result<Vec<RenderedCommand>, BatchError> {
    validate_no_reserved_flags(&config.extra_flags, reserved, config_key)?;

    let commands: Vec<RenderedCommand> = plan(inputs, config.capacity)
        .iter()
        .map(|batch| render(batch, config))
        .collect();

    tracing::debug!(
        executable = %config.executable,
        commands = commands.len(),
        "rendered batch commands"
    );

    Ok(commands)
}
