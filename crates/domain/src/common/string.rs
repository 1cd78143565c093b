//! String normalization utilities.

/// Glyphs authors use to decorate feature names ("**Rage**", "★ Rage").
///
/// Stripped before names are compared or displayed.
pub const DECORATIVE_GLYPHS: &[char] = &[
    '*', '•', '·', '★', '☆', '✦', '✧', '◆', '◇', '#', '_', '~', '`',
];

/// Converts a blank string to `None`, otherwise returns the trimmed value.
///
/// # Examples
///
/// ```
/// use brewsheet_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  hello "), Some("hello"));
/// assert_eq!(none_if_blank("   "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Trims and collapses every run of whitespace into a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes decorative glyphs and collapses whitespace, keeping case.
///
/// This is the display form of a feature name.
///
/// # Examples
///
/// ```
/// use brewsheet_domain::common::strip_decorations;
///
/// assert_eq!(strip_decorations("  **Second   Wind** "), "Second Wind");
/// ```
pub fn strip_decorations(value: &str) -> String {
    let stripped: String = value
        .chars()
        .filter(|c| !DECORATIVE_GLYPHS.contains(c))
        .collect();
    collapse_whitespace(&stripped)
}

/// Normalized matching key for feature names.
///
/// Two names with the same key are treated as the same feature.
///
/// # Examples
///
/// ```
/// use brewsheet_domain::common::normalize_key;
///
/// assert_eq!(normalize_key("Rage"), normalize_key(" rage "));
/// assert_eq!(normalize_key("★ Extra  Attack"), "extra attack");
/// ```
pub fn normalize_key(value: &str) -> String {
    strip_decorations(value).to_lowercase()
}
