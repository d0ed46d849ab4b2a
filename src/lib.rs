// Public API exports
pub mod batch;
pub mod command;
pub mod error;
pub mod fastqc;
pub mod flags;
pub mod inputs;
pub mod manifest;
pub mod settings;

// Re-export main types for convenience
pub use batch::{Batch, Capacity, InputItem, plan};
pub use command::{BatchConfig, BatchConfigBuilder, RenderedCommand, build_commands, render};
pub use error::BatchError;
pub use flags::{ReservedFlag, validate_no_reserved_flags};

pub use fastqc::FastQc;
pub use inputs::collect_inputs;
pub use manifest::PlanManifest;
pub use settings::Settings;
