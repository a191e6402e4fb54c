pub mod compose;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{LocalManifest, LocalStorage};
pub use config::CliConfig;

pub use crate::core::{engine::ConvertEngine, pipeline::ComposePipeline};
pub use utils::error::{ComposeError, Result};
