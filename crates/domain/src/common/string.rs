//! String conversion utilities.

/// Returns `value` with its first character upper-cased.
///
/// Only the first character changes; the rest of the string is kept as-is.
///
/// # Examples
///
/// ```
/// use hudkit_domain::common::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("wolf"), "Wolf");
/// assert_eq!(capitalize_first_letter("eVIL"), "EVIL");
/// assert_eq!(capitalize_first_letter(""), "");
/// ```
pub fn capitalize_first_letter(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extension trait for strings providing `capitalized` as a method.
///
/// # Examples
///
/// ```
/// use hudkit_domain::common::StrExt;
///
/// assert_eq!("knight".capitalized(), "Knight");
/// ```
pub trait StrExt {
    /// Returns a copy with the first character upper-cased.
    fn capitalized(&self) -> String;
}

impl StrExt for str {
    fn capitalized(&self) -> String {
        capitalize_first_letter(self)
    }
}
