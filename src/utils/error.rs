use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Invalid dimension for {field}: {value} (must be a finite number greater than 0)")]
    InvalidDimension { field: String, value: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input or configuration; rerunning with corrected input succeeds.
    High,
    /// The process could not write its results.
    Critical,
}

impl ShapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShapeError::InvalidDimension { .. } => ErrorCategory::Input,
            ShapeError::ConfigError { .. } => ErrorCategory::Configuration,
            ShapeError::IoError(_)
            | ShapeError::SerializationError(_)
            | ShapeError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShapeError::InvalidDimension { field, value } => {
                format!("Shape dimension '{}' has an unusable value: {}", field, value)
            }
            ShapeError::ConfigError { message } => {
                format!("The shape configuration could not be used: {}", message)
            }
            ShapeError::IoError(e) => format!("Could not write results: {}", e),
            ShapeError::SerializationError(e) => format!("Could not encode results as JSON: {}", e),
            ShapeError::CsvError(e) => format!("Could not encode results as CSV: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use dimensions that are finite and greater than zero",
            ErrorCategory::Configuration => {
                "Check that the TOML file exists and lists at least one [[shapes]] entry"
            }
            ErrorCategory::Output => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
