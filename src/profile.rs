//! Greeting profiles and the module handle that builds them.
//!
//! A [`GreetingProfile`] holds one person's name and language and produces
//! greeting text from the static tables in [`crate::language`]. Profiles are
//! created through [`Salute::create`] or the [`salute`] shortcut, never by
//! hand, so a profile always carries a supported language.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::capability::{DiagnosticSink, DomWriter, TracingSink};
use crate::error::{Result, SaluteError};
use crate::language::{validate, Language};

/// Placeholder used for a missing first or last name.
const NAME_PLACEHOLDER: &str = " ";

/// Module handle: the capabilities every profile it creates will share.
///
/// ```
/// use std::sync::Arc;
/// use salute::{MemoryDom, Salute};
///
/// let dom = Arc::new(MemoryDom::new());
/// let mut profile = Salute::new()
///     .with_dom_writer(dom.clone())
///     .create(Some("Doe"), Some("Jane"), Some("en"))?;
///
/// profile.set_element_greeting("#greeting", true)?;
/// assert_eq!(dom.text("#greeting").as_deref(), Some("Greetings Jane Doe"));
/// # Ok::<(), salute::SaluteError>(())
/// ```
#[derive(Clone)]
pub struct Salute {
    dom: Option<Arc<dyn DomWriter>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

/// Short alias for [`Salute`].
pub type S = Salute;

impl Default for Salute {
    fn default() -> Self {
        Self {
            dom: None,
            sink: Some(Arc::new(TracingSink)),
        }
    }
}

impl fmt::Debug for Salute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salute")
            .field("dom", &self.dom.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Salute {
    /// A handle with the tracing sink and no element writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the element writer used by
    /// [`GreetingProfile::set_element_greeting`].
    pub fn with_dom_writer(mut self, writer: Arc<dyn DomWriter>) -> Self {
        self.dom = Some(writer);
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Drop the diagnostic sink; greetings are then produced silently.
    pub fn without_sink(mut self) -> Self {
        self.sink = None;
        self
    }

    /// Whether an element writer has been supplied.
    pub fn has_dom_writer(&self) -> bool {
        self.dom.is_some()
    }

    /// Build a profile from `(last_name, first_name, language)`.
    ///
    /// Missing or empty names become a single space. A missing language
    /// becomes `"en"`; any supplied language must be supported.
    ///
    /// # Errors
    ///
    /// Returns [`SaluteError::UnsupportedLanguage`] when `language` is given
    /// but is not a supported code.
    pub fn create(
        &self,
        last_name: Option<&str>,
        first_name: Option<&str>,
        language: Option<&str>,
    ) -> Result<GreetingProfile> {
        let language = match language {
            None => Language::default(),
            Some(code) => validate(Some(code))?,
        };

        let profile = GreetingProfile {
            last_name: name_or_placeholder(last_name),
            first_name: name_or_placeholder(first_name),
            language,
            greet_text: String::new(),
            dom: self.dom.clone(),
            sink: self.sink.clone(),
        };
        tracing::debug!(language = %profile.language, "created greeting profile");
        Ok(profile)
    }
}

fn name_or_placeholder(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => NAME_PLACEHOLDER.to_string(),
    }
}

/// Build a profile with the default handle (tracing sink, no element writer).
///
/// ```
/// let mut profile = salute::salute(Some("Doe"), Some("Jane"), Some("en"))?;
/// assert_eq!(profile.greet(false).greet_text(), "Hello Jane!");
/// # Ok::<(), salute::SaluteError>(())
/// ```
pub fn salute(
    last_name: Option<&str>,
    first_name: Option<&str>,
    language: Option<&str>,
) -> Result<GreetingProfile> {
    Salute::new().create(last_name, first_name, language)
}

/// Serializable view of a profile's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingSnapshot {
    pub last_name: String,
    pub first_name: String,
    pub language: Language,
    pub greet_text: String,
}

/// One person's name and language, plus the last greeting produced.
///
/// Mutating methods return `&mut Self` so calls chain:
///
/// ```
/// let mut profile = salute::salute(Some("Garcia"), Some("Maria"), None)?;
/// profile.greet(false).log().set_language("es")?.greet(true);
/// assert_eq!(profile.greet_text(), "Saludos Maria Garcia");
/// # Ok::<(), salute::SaluteError>(())
/// ```
pub struct GreetingProfile {
    last_name: String,
    first_name: String,
    language: Language,
    greet_text: String,
    dom: Option<Arc<dyn DomWriter>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl fmt::Debug for GreetingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetingProfile")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("language", &self.language)
            .field("greet_text", &self.greet_text)
            .finish_non_exhaustive()
    }
}

impl GreetingProfile {
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The text stored by the last call to [`greet`](Self::greet), or `""`.
    pub fn greet_text(&self) -> &str {
        &self.greet_text
    }

    /// First name, a space, then last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn informal_greeting(&self) -> String {
        format!("{} {}!", self.language.greetings().common, self.first_name)
    }

    pub fn formal_greeting(&self) -> String {
        format!("{} {}", self.language.greetings().formal, self.full_name())
    }

    /// The login notice [`log`](Self::log) emits, without emitting it.
    pub fn login_notice(&self) -> String {
        format!("{}: {}", self.language.login_message(), self.full_name())
    }

    /// Store the formal or informal greeting in `greet_text` and emit it.
    pub fn greet(&mut self, formal: bool) -> &mut Self {
        self.greet_text = if formal {
            self.formal_greeting()
        } else {
            self.informal_greeting()
        };
        let line = self.greet_text.clone();
        self.emit(&line);
        self
    }

    /// Emit the login notice. `greet_text` is left alone.
    pub fn log(&mut self) -> &mut Self {
        let line = self.login_notice();
        self.emit(&line);
        self
    }

    /// Switch language.
    ///
    /// # Errors
    ///
    /// Returns [`SaluteError::UnsupportedLanguage`] and keeps the current
    /// language when `lang` is not supported.
    pub fn set_language(&mut self, lang: &str) -> Result<&mut Self> {
        match validate(Some(lang)) {
            Ok(language) => self.language = language,
            Err(err) => {
                tracing::warn!(current = %self.language, "{}", err);
                return Err(err);
            }
        }
        Ok(self)
    }

    /// Greet, then write `greet_text` into the element matching `selector`.
    ///
    /// # Errors
    ///
    /// - [`SaluteError::MissingCapability`] when the handle that built this
    ///   profile had no element writer.
    /// - [`SaluteError::MissingSelector`] when `selector` is blank.
    ///
    /// Neither error touches `greet_text`.
    pub fn set_element_greeting(&mut self, selector: &str, formal: bool) -> Result<&mut Self> {
        let dom = self.dom.clone().ok_or(SaluteError::MissingCapability)?;
        if selector.trim().is_empty() {
            return Err(SaluteError::MissingSelector);
        }

        self.greet(formal);
        tracing::debug!(selector, "writing greeting to element");
        dom.write(selector, &self.greet_text);
        Ok(self)
    }

    pub fn snapshot(&self) -> GreetingSnapshot {
        GreetingSnapshot {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            language: self.language,
            greet_text: self.greet_text.clone(),
        }
    }

    fn emit(&self, line: &str) {
        tracing::debug!(target: "salute::profile", "{}", line);
        if let Some(sink) = &self.sink {
            sink.emit(line);
        }
    }
}
