mod config;
mod render;


pub use config::{BatchConfig, BatchConfigBuilder, DEFAULT_OUTPUT_FLAG, DEFAULT_TEMP_FLAG};
pub use render::{RenderedCommand, build_commands, render};
