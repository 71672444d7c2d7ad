//! In-memory model of the translatable surface of a page.
//!
//! The hosting environment builds a [`Page`] from the document it controls,
//! following the original data-attribute contract: elements opt into
//! translation by carrying an alternate-language markup payload, input fields
//! by carrying an alternate placeholder, and at most one control opts in as
//! the language toggle. The controller only ever touches what is modeled
//! here.

/// An element whose inner markup is swapped between the two languages.
///
/// `alternate` is the author-supplied alternate-language payload; it is raw
/// markup and is always sanitized before being written to `inner_html`. The
/// default-language payload is not stored here — the controller captures it
/// from `inner_html` on the first application pass.
#[derive(Debug, Clone)]
pub struct TranslatableElement {
    /// Current inner markup of the element.
    pub inner_html: String,
    /// Alternate-language markup payload (the opt-in attribute value).
    pub alternate: String,
}

impl TranslatableElement {
    pub fn new(inner_html: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            alternate: alternate.into(),
        }
    }
}

/// An input field whose placeholder text is swapped between the two
/// languages. Placeholders are plain attribute text, never markup.
#[derive(Debug, Clone)]
pub struct PlaceholderField {
    /// Current placeholder attribute value.
    pub placeholder: String,
    /// Alternate-language placeholder text.
    pub alternate: String,
}

impl PlaceholderField {
    pub fn new(placeholder: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            alternate: alternate.into(),
        }
    }
}

/// The language-toggle control. Both strings are rewritten on every
/// application pass to advertise the language a click would switch to.
#[derive(Debug, Clone, Default)]
pub struct ToggleButton {
    /// Visible label (target language short code).
    pub label: String,
    /// Accessible name (switch action, in the target language).
    pub accessible_name: String,
}

/// The translatable surface of one page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Path component of the document location, used for title derivation.
    pub path: String,
    /// Document-wide language attribute (normalized code).
    pub lang: String,
    /// Document title.
    pub title: String,
    /// Elements carrying an alternate-language markup payload.
    pub elements: Vec<TranslatableElement>,
    /// Fields carrying an alternate-language placeholder.
    pub placeholders: Vec<PlaceholderField>,
    /// The toggle control, if the page has one.
    pub toggle: Option<ToggleButton>,
}

impl Page {
    /// Create an empty page for the given location path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add a translatable element (builder style).
    pub fn with_element(mut self, element: TranslatableElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a translatable placeholder field (builder style).
    pub fn with_placeholder(mut self, field: PlaceholderField) -> Self {
        self.placeholders.push(field);
        self
    }

    /// Add the toggle control (builder style).
    pub fn with_toggle(mut self) -> Self {
        self.toggle = Some(ToggleButton::default());
        self
    }
}
