//! # Starting Points
//!
//! Free functions which start a new [`PatternBuilder`] with a first call,
//! so patterns may be written without `PatternBuilder::new()`.
//!
//! ```rust
//! use regexpbuilder::factory;
//!
//! let compiled = factory::start_of_input()
//!     .upper_case_letter()
//!     .min(2)
//!     .max(4)
//!     .digits()
//!     .end_of_input()
//!     .compile()
//!     .unwrap();
//!
//! assert!(compiled.is_match("A123").unwrap());
//! assert!(!compiled.is_match("a123").unwrap());
//! ```

use crate::{PatternBuilder, operand::Operand};

/// A new, empty builder.
pub fn builder() -> PatternBuilder {
    PatternBuilder::new()
}

/// A new builder matching case-insensitively.
pub fn ignore_case() -> PatternBuilder {
    builder().ignore_case()
}

/// A new builder in multi-line mode.
pub fn multi_line() -> PatternBuilder {
    builder().multi_line()
}

/// A new builder matching globally.
pub fn global_match() -> PatternBuilder {
    builder().global_match()
}

/// A new builder anchored at the start of the input.
pub fn start_of_input() -> PatternBuilder {
    builder().start_of_input()
}

/// A new builder anchored at the start of a line.
pub fn start_of_line() -> PatternBuilder {
    builder().start_of_line()
}

/// A new builder anchored at the end of the input.
pub fn end_of_input() -> PatternBuilder {
    builder().end_of_input()
}

/// A new builder anchored at the end of a line.
pub fn end_of_line() -> PatternBuilder {
    builder().end_of_line()
}

/// A new builder holding an `either` alternative.
pub fn either<O: Into<Operand>>(operand: O) -> PatternBuilder {
    builder().either(operand)
}

/// A new builder asserting the operand does not match.
pub fn neither<O: Into<Operand>>(operand: O) -> PatternBuilder {
    builder().neither(operand)
}

/// A new builder with a unit repeated exactly `n` times.
pub fn exactly(n: usize) -> PatternBuilder {
    builder().exactly(n)
}

/// A new builder with a unit repeated at least `n` times.
pub fn min(n: usize) -> PatternBuilder {
    builder().min(n)
}

/// A new builder with a unit repeated at most `n` times.
pub fn max(n: usize) -> PatternBuilder {
    builder().max(n)
}

/// A new builder starting with a lookahead.
pub fn ahead(pattern: PatternBuilder) -> PatternBuilder {
    builder().ahead(pattern)
}

/// A new builder starting with a negative lookahead.
pub fn not_ahead(pattern: PatternBuilder) -> PatternBuilder {
    builder().not_ahead(pattern)
}

/// A new builder matching `text` once.
pub fn then(text: &str) -> PatternBuilder {
    builder().then(text)
}

/// A new builder matching `text` once.
pub fn find(text: &str) -> PatternBuilder {
    builder().find(text)
}

/// A new builder matching one or more of `chars`.
pub fn some(chars: &str) -> PatternBuilder {
    builder().some(chars)
}

/// A new builder matching zero or more of `chars`.
pub fn maybe_some(chars: &str) -> PatternBuilder {
    builder().maybe_some(chars)
}

/// A new builder matching `text` zero or one times.
pub fn maybe(text: &str) -> PatternBuilder {
    builder().maybe(text)
}

/// A new builder matching one or more characters.
pub fn something() -> PatternBuilder {
    builder().something()
}

/// A new builder matching zero or more characters.
pub fn anything() -> PatternBuilder {
    builder().anything()
}

/// A new builder matching zero or more characters outside `chars`.
pub fn anything_but(chars: &str) -> PatternBuilder {
    builder().anything_but(chars)
}

/// A new builder matching one or more characters outside `chars`.
pub fn something_but(chars: &str) -> PatternBuilder {
    builder().something_but(chars)
}

/// A new builder matching any one character.
pub fn any() -> PatternBuilder {
    builder().any()
}

/// A new builder matching a line break.
pub fn line_break() -> PatternBuilder {
    builder().line_break()
}

/// A new builder matching one or more line breaks.
pub fn line_breaks() -> PatternBuilder {
    builder().line_breaks()
}

/// A new builder matching a whitespace character.
pub fn whitespace() -> PatternBuilder {
    builder().whitespace()
}

/// A new builder matching a non-whitespace character.
pub fn not_whitespace() -> PatternBuilder {
    builder().not_whitespace()
}

/// A new builder matching a tab.
pub fn tab() -> PatternBuilder {
    builder().tab()
}

/// A new builder matching a digit.
pub fn digit() -> PatternBuilder {
    builder().digit()
}

/// A new builder matching a non-digit.
pub fn not_digit() -> PatternBuilder {
    builder().not_digit()
}

/// A new builder matching a letter.
pub fn letter() -> PatternBuilder {
    builder().letter()
}

/// A new builder matching a non-letter.
pub fn not_letter() -> PatternBuilder {
    builder().not_letter()
}

/// A new builder matching a lower case letter.
pub fn lower_case_letter() -> PatternBuilder {
    builder().lower_case_letter()
}

/// A new builder matching an upper case letter.
pub fn upper_case_letter() -> PatternBuilder {
    builder().upper_case_letter()
}

/// A new builder matching `pattern` once.
pub fn append(pattern: PatternBuilder) -> PatternBuilder {
    builder().append(pattern)
}

/// A new builder matching `pattern` zero or one times.
pub fn optional(pattern: PatternBuilder) -> PatternBuilder {
    builder().optional(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_method_form() {
        assert_eq!(builder(), PatternBuilder::new());
        assert_eq!(ignore_case(), PatternBuilder::new().ignore_case());
        assert_eq!(
            either("cat").or("dog"),
            PatternBuilder::new().either("cat").or("dog")
        );
        assert_eq!(exactly(2).of("p"), PatternBuilder::new().exactly(2).of("p"));
        assert_eq!(some("abc"), PatternBuilder::new().some("abc"));
        assert_eq!(line_break(), PatternBuilder::new().line_break());
        assert_eq!(
            optional(digit()),
            PatternBuilder::new().optional(PatternBuilder::new().digit())
        );
    }

    #[test]
    fn test_anchor_starts() {
        assert_eq!(start_of_input().literal(), "(?:^)");
        assert_eq!(end_of_input().literal(), "(?:$)");
        assert_eq!(start_of_line().flags().code(), "m");
        assert_eq!(end_of_line().flags().code(), "m");
        assert_eq!(global_match().flags().code(), "g");
        assert_eq!(multi_line().flags().code(), "m");
    }

    #[test]
    fn test_lookahead_starts() {
        assert!(ahead(then("a")).is_fancy());
        assert_eq!(not_ahead(then("a")).literal(), "(?!(?:(?:a){1,1}))");
        assert_eq!(neither("a").literal(), "(?!(?:(?:a){1,1}))");
    }

    #[test]
    fn test_compiles() {
        let compiled = find("x")
            .append(anything_but("y"))
            .then("y")
            .compile()
            .unwrap();
        assert!(compiled.is_match("xabcy").unwrap());
        assert!(!compiled.is_match("xabc").unwrap());
    }
}
