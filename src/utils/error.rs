use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::IoError(e) => format!("File access failed: {}", e),
            ApiError::TomlError(e) => format!("Could not parse the config file: {}", e),
            ApiError::InvalidConfigValueError { field, value, .. } => {
                format!("The value '{}' is not valid for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ApiError::IoError(_) => "Check that the path exists and is readable".to_string(),
            ApiError::TomlError(_) => {
                "Check the config file against the [server] and [cors] sections".to_string()
            }
            ApiError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}
