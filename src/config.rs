//! Greeting defaults loaded from TOML.
//!
//! ```toml
//! language = "es"
//! formal = true
//! login = false
//! selector = "#greeting"
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, SaluteError};
use crate::language::{validate, Language};

/// Defaults applied when the command line leaves a value unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaluteConfig {
    /// Language code used when none is given
    #[serde(default = "default_language")]
    pub language: String,
    /// Whether to greet formally
    #[serde(default)]
    pub formal: bool,
    /// Whether to also emit the login notice
    #[serde(default)]
    pub login: bool,
    /// Element selector to write the greeting into
    #[serde(default)]
    pub selector: Option<String>,
}

fn default_language() -> String {
    Language::default().code().to_string()
}

impl Default for SaluteConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            formal: false,
            login: false,
            selector: None,
        }
    }
}

impl SaluteConfig {
    /// Load configuration from a TOML file.
    ///
    /// Values can be overridden with `SALUTE__<KEY>` environment variables
    /// (e.g. `SALUTE__LANGUAGE=es`).
    ///
    /// # Errors
    ///
    /// Returns [`SaluteError::ConfigNotFound`] if the file does not exist and
    /// [`SaluteError::Config`] if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SaluteError::ConfigNotFound(path.display().to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("SALUTE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: SaluteConfig = config.try_deserialize()?;
        tracing::debug!(path = %path.display(), language = %loaded.language, "loaded configuration");
        Ok(loaded)
    }

    /// The configured language, checked against the supported table.
    pub fn language(&self) -> Result<Language> {
        validate(Some(&self.language))
    }
}
