//! Error type for greeting profiles and their configuration.

use config::ConfigError;
use thiserror::Error;

/// Errors raised by profile construction, language changes, element writes
/// and configuration loading.
#[derive(Debug, Error)]
pub enum SaluteError {
    /// The language code is not one of the supported codes.
    ///
    /// Carries the offending value, or `Undefined` when none was given.
    #[error("Language {0} is not supported!")]
    UnsupportedLanguage(String),

    /// An element greeting was requested but no element writer was supplied.
    #[error("no element writer configured")]
    MissingCapability,

    /// An element greeting was requested with an empty selector.
    #[error("missing element selector")]
    MissingSelector,

    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration could not be read or deserialized.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SaluteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaluteError::UnsupportedLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Language fr is not supported!");

        assert_eq!(
            SaluteError::MissingCapability.to_string(),
            "no element writer configured"
        );
        assert_eq!(
            SaluteError::MissingSelector.to_string(),
            "missing element selector"
        );

        let err = SaluteError::ConfigNotFound("salute.toml".to_string());
        assert_eq!(err.to_string(), "configuration file not found: salute.toml");
    }
}
