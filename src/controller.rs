//! Language state controller.
//!
//! Owns the current language, drives application passes over a [`Page`], and
//! persists the preference. The default-language payload of each element is
//! captured lazily on the first pass into an explicit per-element cache; a
//! presence check (not the cached value itself) decides whether capture has
//! happened, so toggling back is lossless even for elements whose first-seen
//! markup was empty.
//!
//! Storage is best-effort throughout: a failed read means "no stored
//! preference", a failed write is logged and otherwise ignored, and the page
//! state stays correct for the session either way.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::i18n::{strings_for, Language};
use crate::page::Page;
use crate::sanitize::sanitize_translation;
use crate::storage::PreferenceStore;
use crate::title::derive_title;

/// Two states (default shown / alternate shown), one transition ([`toggle`]),
/// no terminal state — the controller lives for the page session.
///
/// [`toggle`]: LanguageController::toggle
pub struct LanguageController<S: PreferenceStore> {
    store: S,
    language: Language,
    /// Captured default-language markup, keyed by element index.
    original_markup: HashMap<usize, String>,
    /// Captured default-language placeholders, keyed by field index.
    original_placeholders: HashMap<usize, String>,
}

impl<S: PreferenceStore> LanguageController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            language: Language::default(),
            original_markup: HashMap::new(),
            original_placeholders: HashMap::new(),
        }
    }

    /// The language currently shown.
    pub fn language(&self) -> Language {
        self.language
    }

    /// One-time entry point for the hosting environment.
    ///
    /// Derives the page title from the location path, resolves the stored
    /// preference (absence and read failures both mean the default language),
    /// and runs a full application pass.
    pub fn initialize(&mut self, page: &mut Page) {
        page.title = derive_title(&page.path);

        let stored = match self.store.read() {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read language preference: {err}");
                None
            }
        };
        let code = stored.unwrap_or_default();
        self.apply_language(page, &code);
    }

    /// Apply a language to the page.
    ///
    /// `requested` is normalized first; any unrecognized code collapses to
    /// the default language. The pass captures missing originals, swaps
    /// every payload through the sanitizer, rewrites the toggle control, and
    /// persists the normalized code.
    pub fn apply_language(&mut self, page: &mut Page, requested: &str) {
        let language = Language::normalize(requested);
        debug!(language = language.code(), "applying language to page");

        self.language = language;
        page.lang = language.code().to_string();

        for (index, element) in page.elements.iter_mut().enumerate() {
            let original = self
                .original_markup
                .entry(index)
                .or_insert_with(|| element.inner_html.clone());
            let payload = match language {
                Language::Turkish => element.alternate.as_str(),
                Language::English => original.as_str(),
            };
            element.inner_html = sanitize_translation(payload);
        }

        for (index, field) in page.placeholders.iter_mut().enumerate() {
            let original = self
                .original_placeholders
                .entry(index)
                .or_insert_with(|| field.placeholder.clone());
            // Placeholders are plain attribute text; no sanitization pass.
            field.placeholder = match language {
                Language::Turkish => field.alternate.clone(),
                Language::English => original.clone(),
            };
        }

        if let Some(toggle) = page.toggle.as_mut() {
            let strings = strings_for(language);
            toggle.label = strings.toggle_label.to_string();
            toggle.accessible_name = strings.toggle_action.to_string();
        }

        if let Err(err) = self.store.write(language.code()) {
            warn!("failed to persist language preference: {err}");
        }
    }

    /// Flip the current language and re-run the application pass.
    pub fn toggle(&mut self, page: &mut Page) {
        let next = self.language.toggle();
        self.apply_language(page, next.code());
    }
}
