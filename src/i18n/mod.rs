//! Internationalization (i18n) module for the two supported page languages.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `language`: the `Language` type with lenient normalization and toggling
//! - `strings`: localized strings for the language-toggle control
//!
//! # Example
//!
//! ```rust,ignore
//! use page_localizer::i18n::Language;
//!
//! // Anything that is not exactly "tr" collapses to the default language
//! let lang = Language::normalize("fr");
//! assert_eq!(lang, Language::English);
//! ```

mod language;
mod strings;

pub use language::Language;
pub use strings::{strings_for, LanguageStrings};
