pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ShapeFileConfig;
pub use crate::core::{
    calculator::ShapeCalculator,
    report::{LineReporter, OutputFormat},
    AnyShape, AreaRecord, Circle, Rectangle, Reporter, Shape, Triangle,
};
pub use utils::error::{Result, ShapeError};
