use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid argument for {field}: '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown employee: #{id}")]
    UnknownEmployee { id: u64 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RosterError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => {
                format!("The value given for {} was rejected: {}", field, reason)
            }
            Self::UnknownEmployee { id } => format!("No employee with id #{} is on file", id),
            Self::CsvError(_) => "The employee records could not be read".to_string(),
            Self::IoError(e) => format!("A file could not be accessed: {}", e),
            Self::SerializationError(_) => "An employee snapshot could not be rendered".to_string(),
            Self::TomlError(_) | Self::ConfigError { .. } => {
                "The configuration file could not be loaded".to_string()
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Records look like 'first,last,salary' and full names like 'First Last'"
            }
            Self::UnknownEmployee { .. } => "Add the employee to the roster before referencing it",
            Self::CsvError(_) => "Check that every line holds exactly three comma-separated fields",
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Report this as a bug",
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
