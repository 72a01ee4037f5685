pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Every flag is optional; with none given the built-in shapes are calculated.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shape-area")]
#[command(about = "Calculates the area of rectangles, triangles and circles")]
pub struct CliConfig {
    /// TOML file with a [[shapes]] list to calculate instead of the built-in shapes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format; overrides [output].format from the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flag first, then the config file, then plain text.
    pub fn resolve_format(&self, file_format: Option<OutputFormat>) -> OutputFormat {
        self.format.or(file_format).unwrap_or_default()
    }
}
