//! Display name formatting for customer-facing screens and receipts.

/// Shown when neither name part has any visible characters.
pub const ANONYMOUS: &str = "Anonymous";

/// Joins the trimmed first and last name with a single space.
///
/// Missing parts count as empty; if both are empty after trimming the
/// result is `"Anonymous"`. Never fails.
///
/// ## Example
/// ```rust
/// use checkout_core::display_name;
///
/// assert_eq!(display_name(Some("  John  "), Some("  Doe  ")), "John Doe");
/// assert_eq!(display_name(None, Some("Doe")), "Doe");
/// assert_eq!(display_name(Some("   "), None), "Anonymous");
/// ```
pub fn display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let parts: Vec<&str> = [first_name, last_name]
        .into_iter()
        .map(|part| part.unwrap_or_default().trim_matches(is_blank))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        ANONYMOUS.to_string()
    } else {
        parts.join(" ")
    }
}

/// White space and the byte order mark. U+0085 is not trimmed.
fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
