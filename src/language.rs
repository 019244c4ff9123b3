//! Supported languages and their static greeting tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SaluteError};

/// Language codes a profile may use, in table order.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "es"];

/// Sentinel used in error messages when no language was given.
const UNDEFINED: &str = "Undefined";

/// A supported greeting language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

/// The pair of greeting words for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greetings {
    /// Used by informal greetings.
    pub common: &'static str,
    /// Used by formal greetings.
    pub formal: &'static str,
}

const ENGLISH: Greetings = Greetings {
    common: "Hello",
    formal: "Greetings",
};

const SPANISH: Greetings = Greetings {
    common: "Hola",
    formal: "Saludos",
};

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// The two-letter code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Greeting words for this language.
    pub fn greetings(self) -> Greetings {
        match self {
            Language::En => ENGLISH,
            Language::Es => SPANISH,
        }
    }

    /// Login notice prefix for this language.
    pub fn login_message(self) -> &'static str {
        match self {
            Language::En => "Logged in",
            Language::Es => "Inició sesión",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SaluteError;

    fn from_str(s: &str) -> Result<Self> {
        validate(Some(s))
    }
}

/// Check a language code against the supported table.
///
/// Codes are matched exactly (`"EN"` is not `"en"`). A missing or empty
/// value is reported with the `Undefined` sentinel.
///
/// # Examples
///
/// ```
/// use salute::{validate, Language};
///
/// assert_eq!(validate(Some("es")).unwrap(), Language::Es);
/// assert!(validate(Some("fr")).is_err());
/// assert!(validate(None).is_err());
/// ```
pub fn validate(lang: Option<&str>) -> Result<Language> {
    match lang {
        Some("en") => Ok(Language::En),
        Some("es") => Ok(Language::Es),
        Some(other) if !other.is_empty() => {
            Err(SaluteError::UnsupportedLanguage(other.to_string()))
        }
        _ => Err(SaluteError::UnsupportedLanguage(UNDEFINED.to_string())),
    }
}
