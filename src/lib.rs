//! Salute - formal and informal greetings in English and Spanish
//!
//! Build a [`GreetingProfile`] with [`salute`] (or its short alias [`s`]),
//! then chain greeting calls on it:
//!
//! ```
//! let mut profile = salute::s(Some("Doe"), Some("Jane"), Some("en"))?;
//! profile.greet(true).log();
//! assert_eq!(profile.greet_text(), "Greetings Jane Doe");
//! # Ok::<(), salute::SaluteError>(())
//! ```
//!
//! Hosts that can render text supply a [`DomWriter`] through a [`Salute`]
//! handle (alias [`S`]); greeting and login lines go to a
//! [`DiagnosticSink`], `tracing` by default.

pub mod capability;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod profile;

pub use capability::{DiagnosticSink, DomWriter, MemoryDom, TracingSink};
pub use crate::config::SaluteConfig;
pub use error::{Result, SaluteError};
pub use language::{validate, Greetings, Language, SUPPORTED_LANGUAGES};
pub use profile::{salute, GreetingProfile, GreetingSnapshot, Salute, S};

/// Short alias for [`salute`].
pub use profile::salute as s;
