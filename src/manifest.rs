use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::batch::{InputItem, plan};
use crate::command::{BatchConfig, RenderedCommand};

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanManifest {
    pub plan_id: String,
    pub created_at: String,
    pub generator: String,
    pub executable: String,
    /// `None` when every input shares one batch
    pub capacity: Option<usize>,
    pub input_count: usize,
    pub batch_count: usize,
    /// SHA-256 over the rendered commands, one per line
    pub fingerprint: String,
    pub batches: Vec<BatchEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub index: usize,
    pub items: Vec<String>,
    pub command: RenderedCommand,
}

impl PlanManifest {
    /// Describe `commands`, as returned by `build_commands` for the same
    /// `inputs` and `config`, alongside the items each one covers
    pub fn new(inputs: &[InputItem], config: &BatchConfig, commands: &[RenderedCommand]) -> Self {
        let batches: Vec<BatchEntry> = plan(inputs, config.capacity)
            .iter()
            .zip(commands)
            .enumerate()
            .map(|(index, (batch, command))| BatchEntry {
                index,
                items: batch.items().iter().map(InputItem::to_string).collect(),
                command: command.clone(),
            })
            .collect();

        let commands: Vec<&RenderedCommand> = batches.iter().map(|b| &b.command).collect();

        Self {
            plan_id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("seqbatch v{}", env!("CARGO_PKG_VERSION")),
            executable: config.executable.clone(),
            capacity: config.capacity.limit(),
            input_count: inputs.len(),
            batch_count: batches.len(),
            fingerprint: fingerprint(&commands),
            batches,
        }
    }

    /// Write the manifest as pretty JSON
    pub fn write_to_file(&self, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        fs::write(output_path, json)
            .context(format!("Failed to write manifest: {}", output_path.display()))?;

        tracing::info!("✓ Wrote plan manifest to {}", output_path.display());
        Ok(())
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&raw).context("Failed to parse manifest JSON")
    }
}

/// Hex SHA-256 of the commands joined by newlines
pub fn fingerprint(commands: &[&RenderedCommand]) -> String {
    let joined = commands
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hex::encode(hasher.finalize())
}
