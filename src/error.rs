use thiserror::Error;

pub type EmailResult<T> = Result<T, EmailError>;

#[derive(Error, Debug, Clone)]
pub enum EmailError {
    #[error("Render mode not determined for '{path}': expected an 'email/text/' or 'email/html/' path segment")]
    ModeNotDetermined { path: String },

    #[error("Invalid value for attribute '{attribute}': {reason}")]
    InvalidAttributeValue { attribute: String, reason: String },

    #[error("Unknown template '{name}'")]
    MissingTemplate { name: String },

    #[error("Template '{template}' has no value for placeholder '{placeholder}'")]
    MissingPlaceholder { template: String, placeholder: String },

    #[error("Unterminated placeholder in template '{name}'")]
    UnterminatedPlaceholder { name: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("YAML error: {0}")]
    YamlError(String),
}

impl From<serde_yaml::Error> for EmailError {
    fn from(err: serde_yaml::Error) -> Self {
        EmailError::YamlError(err.to_string())
    }
}
