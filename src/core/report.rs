use crate::core::{AreaRecord, Reporter};
use crate::utils::error::{Result, ShapeError};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare area, one per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// `shape,area` rows without a header
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ShapeError::ConfigError {
                message: format!("Unsupported output format '{}'. Valid formats: text, json, csv", other),
            }),
        }
    }
}

/// Writes each record as a single line and flushes it immediately.
pub struct LineReporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl LineReporter<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, record: &AreaRecord) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", record.area)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(&mut self.out);
                writer.serialize(record)?;
                writer.flush()?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
