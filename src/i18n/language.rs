//! Language type: the two page languages with lenient normalization.
//!
//! The page supports exactly two languages: English (the default, whose text
//! is already present in the markup) and Turkish (the alternate, supplied via
//! data attributes). Any unrecognized code collapses to the default rather
//! than being rejected.

/// One of the two supported page languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// The default language; its text is captured from the page itself.
    #[default]
    English,
    /// The alternate language; its text comes from author-supplied attributes.
    Turkish,
}

impl Language {
    /// Normalize an arbitrary language code to a supported language.
    ///
    /// Exactly `"tr"` yields `Turkish`; every other input (empty, unknown
    /// codes, different casing) yields `English`. This never fails.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Language::normalize("tr"), Language::Turkish);
    /// assert_eq!(Language::normalize("fr"), Language::English);
    /// ```
    pub fn normalize(code: &str) -> Language {
        if code == "tr" {
            Language::Turkish
        } else {
            Language::English
        }
    }

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string (`"en"` or `"tr"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Turkish => "Turkish",
        }
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Turkish => "Türkçe",
        }
    }

    /// The other supported language.
    ///
    /// A single click of the toggle control moves from `self` to
    /// `self.toggle()`.
    pub fn toggle(&self) -> Language {
        match self {
            Language::English => Language::Turkish,
            Language::Turkish => Language::English,
        }
    }

    /// Check if this is the default language.
    ///
    /// # Returns
    /// `true` for English (the language already present in the page markup),
    /// `false` for the alternate.
    pub fn is_default(&self) -> bool {
        matches!(self, Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_turkish() {
        assert_eq!(Language::normalize("tr"), Language::Turkish);
    }

    #[test]
    fn test_normalize_english() {
        assert_eq!(Language::normalize("en"), Language::English);
    }

    #[test]
    fn test_normalize_unknown_code_collapses_to_default() {
        assert_eq!(Language::normalize("fr"), Language::English);
        assert_eq!(Language::normalize("es"), Language::English);
        assert_eq!(Language::normalize("turkish"), Language::English);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(Language::normalize(""), Language::English);
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        // Only the exact alternate code counts
        assert_eq!(Language::normalize("TR"), Language::English);
        assert_eq!(Language::normalize("Tr"), Language::English);
    }

    #[test]
    fn test_normalize_whitespace_not_trimmed() {
        assert_eq!(Language::normalize(" tr"), Language::English);
        assert_eq!(Language::normalize("tr "), Language::English);
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Turkish.code(), "tr");
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::English.name(), "English");
        assert_eq!(Language::Turkish.name(), "Turkish");
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Turkish.native_name(), "Türkçe");
    }

    #[test]
    fn test_is_default() {
        assert!(Language::English.is_default());
        assert!(!Language::Turkish.is_default());
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Language::English.toggle(), Language::Turkish);
        assert_eq!(Language::Turkish.toggle(), Language::English);
    }

    #[test]
    fn test_toggle_round_trip() {
        let lang = Language::English;
        assert_eq!(lang.toggle().toggle(), lang);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::Turkish;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_normalize_round_trips_through_code() {
        for lang in [Language::English, Language::Turkish] {
            assert_eq!(Language::normalize(lang.code()), lang);
        }
    }
}
