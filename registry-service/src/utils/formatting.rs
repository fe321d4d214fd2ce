//! Name formatting utilities
//!
//! Title-casing for display. Only the first character of a word is ever
//! touched; the rest of the word is kept as written.

/// Uppercases the first character of `word` and keeps the remainder as is.
///
/// Characters without an uppercase form (digits, punctuation) are returned
/// unchanged. Some characters expand when uppercased (`'ß'` becomes `"SS"`).
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Title-cases `text` word by word
///
/// Splits on runs of whitespace, capitalizes the first character of each
/// word with [`capitalize_first`] and joins the words with a single space.
/// Leading and trailing whitespace is dropped, so empty or blank input
/// yields an empty string.
///
/// # Examples
/// ```
/// use registry_service::title_case;
///
/// assert_eq!(title_case("john doe"), "John Doe");
/// assert_eq!(title_case("  a   b  "), "A B");
/// ```
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
