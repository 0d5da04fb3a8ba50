//! # Literal Escaping
//!
//! Caller text lands in two different syntactic contexts, and each has its
//! own set of metacharacters:
//!
//! * outside a character class - [`escape_outside_class`].
//! * inside a character class - [`escape_inside_class`].
//!
//! The `regex` dialect treats `[` as a nested class and `&&`, `--`, `~~` as
//! set operators inside a class, so those are escaped there as well.

use crate::alloc::string::String;

/// Characters which carry meaning outside a character class.
pub const OUTSIDE_CLASS_SPECIALS: &[char] = &[
    '.', '*', '+', '?', '^', '=', '!', ':', '$', '{', '}', '(', ')', '|', '[', ']', '/', '\\',
];

/// Characters which carry meaning inside a character class.
pub const INSIDE_CLASS_SPECIALS: &[char] = &['\\', ']', '[', '^', '-', '&', '~'];

fn escape_with(
    text: &str,
    specials: &[char],
) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if specials.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape text for use as a literal outside a character class.
///
/// ## Arguments
/// * `text` - the raw caller text.
///
/// ## Returns
/// The text with each metacharacter prefixed by exactly one `\`.
pub fn escape_outside_class(text: &str) -> String {
    escape_with(text, OUTSIDE_CLASS_SPECIALS)
}

/// Escape text for use as the members of a character class.
///
/// ## Arguments
/// * `text` - the raw class members.
///
/// ## Returns
/// The members with each class metacharacter prefixed by exactly one `\`.
pub fn escape_inside_class(text: &str) -> String {
    escape_with(text, INSIDE_CLASS_SPECIALS)
}
