use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleepCalcError {
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Calendar arithmetic overflow adding {minutes} minutes to {from}")]
    CalendarArithmeticOverflow { from: String, minutes: i64 },

    #[error("Unknown timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

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
    Calculation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl SleepCalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTimestamp { .. } => ErrorCategory::Input,
            Self::CalendarArithmeticOverflow { .. } => ErrorCategory::Calculation,
            Self::InvalidTimezone { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // recovered locally by the calculator, only ever logged
            ErrorCategory::Calculation => ErrorSeverity::Low,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for an error that ends the run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Critical => 3,
            ErrorSeverity::Low | ErrorSeverity::High => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidTimestamp { .. } => {
                "Use an ISO-8601 timestamp (2026-10-19T22:30:00+02:00) or a clock time (22:30, 10:30 PM)"
                    .to_string()
            }
            Self::CalendarArithmeticOverflow { .. } => {
                "Choose a bedtime well inside the supported calendar range".to_string()
            }
            Self::InvalidTimezone { .. } => {
                "Use an IANA timezone name such as Europe/Berlin or America/New_York".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your config file or CLI flags", field)
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try another output format with --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidTimestamp { input, .. } => {
                format!("Could not understand the bedtime '{}'", input)
            }
            Self::InvalidTimezone { name } => format!("'{}' is not a known timezone", name),
            Self::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SleepCalcError>;
