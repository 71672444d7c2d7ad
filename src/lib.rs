//! Two-language page localization.
//!
//! Toggles the visible text of a modeled page between the default language
//! (English, captured from the page itself) and an alternate language
//! (Turkish, supplied through data attributes), persists the preference, and
//! sanitizes all translation markup before it reaches the page.
//!
//! The hosting environment builds a [`page::Page`], creates a
//! [`controller::LanguageController`] over a [`storage::PreferenceStore`],
//! calls [`controller::LanguageController::initialize`] once at load, and
//! calls [`controller::LanguageController::toggle`] whenever the toggle
//! control is activated.
//!
//! ```rust,ignore
//! use page_localizer::config::Config;
//! use page_localizer::controller::LanguageController;
//! use page_localizer::page::{Page, TranslatableElement};
//! use page_localizer::storage::FileStore;
//!
//! let config = Config::from_env()?;
//! let mut controller = LanguageController::new(FileStore::new(config.preference_file));
//! let mut page = Page::new("/about.html")
//!     .with_element(TranslatableElement::new("Hello", "Merhaba"))
//!     .with_toggle();
//!
//! controller.initialize(&mut page);
//! controller.toggle(&mut page); // now showing Turkish
//! ```

pub mod config;
pub mod controller;
pub mod i18n;
pub mod page;
pub mod sanitize;
pub mod storage;
pub mod title;
