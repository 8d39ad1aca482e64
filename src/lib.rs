pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{export::SceneExporter, memory::MemoryScene, storage::LocalStorage};
pub use config::{ImportSettings, OutputSettings};
pub use self::core::{etl::ImportEngine, pipeline::StrokePipeline};
pub use utils::error::{ImportError, Result};
