use crate::i18n::Language;

/// Localized strings for the language-toggle control, keyed by the language
/// currently shown on the page.
///
/// Both strings describe the language a click would switch *to*: the label is
/// that language's short code, and the action text is written in that
/// language so the reader it addresses can understand it.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Visible button label: the short code of the target language
    /// (e.g., "TR" while English is shown).
    pub toggle_label: &'static str,

    /// Accessible name of the button: the switch action described in the
    /// target language (e.g., "Türkçeye geç" while English is shown).
    pub toggle_action: &'static str,
}

// ==================== English (default) ====================

/// Strings used while the English page is shown: a click switches to Turkish.
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    toggle_label: "TR",
    toggle_action: "Türkçeye geç",
};

// ==================== Turkish (alternate) ====================

/// Strings used while the Turkish page is shown: a click switches to English.
pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    toggle_label: "EN",
    toggle_action: "Switch to English",
};

/// Get the toggle-control strings for the language currently shown.
pub fn strings_for(shown: Language) -> &'static LanguageStrings {
    match shown {
        Language::English => &ENGLISH_STRINGS,
        Language::Turkish => &TURKISH_STRINGS,
    }
}
