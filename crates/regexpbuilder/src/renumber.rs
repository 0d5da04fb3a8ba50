//! # Backreference Renumbering
//!
//! When one pattern is spliced into another, its capture groups are numbered
//! after the groups already present in the host; so every backreference it
//! contains must be shifted by the same amount.

use crate::alloc::string::{String, ToString};

/// Shift every backreference (`\N`) in `literal` by `offset`.
///
/// The literal is scanned left to right as a sequence of escape pairs; a `\`
/// followed by digits is a backreference, while `\\` is an escaped backslash
/// and the digits after it are plain text.
///
/// ## Arguments
/// * `literal` - a rendered pattern literal.
/// * `offset` - the number of capture groups which precede the literal.
///
/// ## Returns
/// The literal with all backreferences shifted.
pub fn renumber_backreferences(
    literal: &str,
    offset: usize,
) -> String {
    if offset == 0 {
        return literal.into();
    }

    let mut out = String::with_capacity(literal.len() + 8);
    let mut chars = literal.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        out.push(c);
        if c != '\\' {
            continue;
        }

        let Some(&(start, next)) = chars.peek() else {
            break;
        };

        if !next.is_ascii_digit() {
            // Escape pair; the escaped character is never a backreference.
            out.push(next);
            chars.next();
            continue;
        }

        let mut end = start;
        while let Some(&(idx, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = idx + d.len_utf8();
            chars.next();
        }

        let digits = &literal[start..end];
        match digits.parse::<usize>() {
            Ok(group) => out.push_str(&(group + offset).to_string()),
            // Out of range for any engine; left as written.
            Err(_) => out.push_str(digits),
        }
    }

    out
}

/// Count the backreferences in `literal`.
///
/// Uses the same escape-pair scan as [`renumber_backreferences`].
pub fn count_backreferences(literal: &str) -> usize {
    let mut count = 0;
    let mut chars = literal.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            continue;
        }
        match chars.next() {
            Some(d) if d.is_ascii_digit() => {
                count += 1;
                while chars.next_if(|d| d.is_ascii_digit()).is_some() {}
            }
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_is_identity() {
        assert_eq!(renumber_backreferences(r"(a)\1", 0), r"(a)\1");
    }

    #[test]
    fn test_shifts_every_backreference() {
        let literal = r"((?:a))((?:b))(?:\1)(?:\2)";
        assert_eq!(
            renumber_backreferences(literal, 1),
            r"((?:a))((?:b))(?:\2)(?:\3)"
        );
        assert_eq!(count_backreferences(literal), 2);
    }

    #[test]
    fn test_multi_digit_groups() {
        assert_eq!(renumber_backreferences(r"\9\10x", 3), r"\12\13x");
    }

    #[test]
    fn test_escaped_backslash_is_not_a_backreference() {
        // `\\1` is a literal backslash followed by a literal '1'.
        assert_eq!(renumber_backreferences(r"\\1", 4), r"\\1");
        assert_eq!(count_backreferences(r"\\1"), 0);

        // `\\\1` is a literal backslash followed by a backreference.
        assert_eq!(renumber_backreferences(r"\\\1", 4), r"\\\5");
        assert_eq!(count_backreferences(r"\\\1"), 1);
    }

    #[test]
    fn test_other_escapes_pass_through() {
        assert_eq!(
            renumber_backreferences(r"(?:\d)(?:\s)\.\1", 2),
            r"(?:\d)(?:\s)\.\3"
        );
    }

    #[test]
    fn test_leading_backreference() {
        // A backreference at the very start has no preceding character.
        assert_eq!(renumber_backreferences(r"\1abc", 1), r"\2abc");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(renumber_backreferences("a\\", 1), "a\\");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(renumber_backreferences(r"é\1ü\2", 1), r"é\2ü\3");
    }
}
