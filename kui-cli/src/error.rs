//! Error type for the `kui` binary.

use kui_core::KuiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configured macro or terminal action couldn't be applied.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Kui(#[from] KuiError),
}

impl From<kui_core::ContextError> for CliError {
    fn from(e: kui_core::ContextError) -> Self {
        CliError::Kui(KuiError::from(e))
    }
}

impl From<kui_core::MapSetError> for CliError {
    fn from(e: kui_core::MapSetError) -> Self {
        CliError::Kui(KuiError::from(e))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message_includes_detail() {
        let err = CliError::Config("bad macro".to_string());
        assert_eq!(err.to_string(), "configuration error: bad macro");
    }

    #[test]
    fn map_set_error_converts_through_kui_error() {
        let err: CliError = kui_core::MapSetError::NotPresent.into();
        assert!(matches!(err, CliError::Kui(_)));
    }
}
