//! Convenience vocabulary.
//!
//! Everything here is a composition of the core [`PatternBuilder`] calls.

use crate::{
    PatternBuilder,
    alloc::vec,
    fragment::FragmentSource,
    segment::{Opening, Segment},
};

const LETTERS: &str = "A-Za-z";
const LOWER_CASE_LETTERS: &str = "a-z";
const UPPER_CASE_LETTERS: &str = "A-Z";

// `\d` is Unicode-aware in the `regex` dialect.
const ASCII_DIGITS: &str = "[0-9]";
const NOT_ASCII_DIGITS: &str = "[^0-9]";

impl PatternBuilder {
    /// Exactly one of `text`.
    pub fn then(
        self,
        text: &str,
    ) -> Self {
        self.exactly(1).of(text)
    }

    /// Alias of [`PatternBuilder::then`], for starting a pattern.
    pub fn find(
        self,
        text: &str,
    ) -> Self {
        self.then(text)
    }

    /// One or more characters from `chars`.
    pub fn some(
        self,
        chars: &str,
    ) -> Self {
        self.min(1).from_class(chars)
    }

    /// Zero or more characters from `chars`.
    pub fn maybe_some(
        self,
        chars: &str,
    ) -> Self {
        self.min(0).from_class(chars)
    }

    /// Zero or one of `text`.
    pub fn maybe(
        self,
        text: &str,
    ) -> Self {
        self.max(1).of(text)
    }

    /// One or more of any character.
    pub fn something(self) -> Self {
        self.min(1).of_any()
    }

    /// Zero or more of any character.
    pub fn anything(self) -> Self {
        self.min(0).of_any()
    }

    /// Exactly one of any character.
    pub fn any(self) -> Self {
        self.exactly(1).of_any()
    }

    /// Zero or more characters, not containing `text`.
    ///
    /// A single character becomes a negated class; longer text becomes a
    /// negative lookahead followed by [`PatternBuilder::anything`].
    pub fn anything_but(
        self,
        text: &str,
    ) -> Self {
        match text.chars().count() {
            0 => {
                log::warn!("anything_but(\"\") excludes nothing");
                self.anything()
            }
            1 => self.min(0).not_from_class(text),
            _ => self
                .not_ahead(PatternBuilder::new().then(text))
                .anything(),
        }
    }

    /// One or more characters, not containing `text`.
    ///
    /// See [`PatternBuilder::anything_but`].
    pub fn something_but(
        self,
        text: &str,
    ) -> Self {
        match text.chars().count() {
            0 => {
                log::warn!("something_but(\"\") excludes nothing");
                self.something()
            }
            1 => self.min(1).not_from_class(text),
            _ => self
                .not_ahead(PatternBuilder::new().then(text))
                .something(),
        }
    }

    /// A line break: `\r\n`, `\r` or `\n`.
    pub fn line_break(mut self) -> Self {
        self.push_segment(Segment::new(
            Opening::Group,
            vec![r"\r\n".into(), r"\r".into(), r"\n".into()],
        ));
        self
    }

    /// Line breaks, repeated by the pending quantity.
    pub fn line_breaks(self) -> Self {
        self.like(PatternBuilder::new().line_break())
    }

    /// A whitespace character.
    ///
    /// With a pending quantity, the quantity applies to the whitespace.
    pub fn whitespace(self) -> Self {
        self.escape_unit(r"\s")
    }

    /// A non-whitespace character.
    ///
    /// With a pending quantity, the quantity applies to it.
    pub fn not_whitespace(self) -> Self {
        self.escape_unit(r"\S")
    }

    /// Whitespace, repeated by the pending quantity.
    pub fn whitespaces(self) -> Self {
        self.like(PatternBuilder::new().whitespace())
    }

    /// Non-whitespace, repeated by the pending quantity.
    pub fn not_whitespaces(self) -> Self {
        self.like(PatternBuilder::new().not_whitespace())
    }

    /// A tab character.
    pub fn tab(mut self) -> Self {
        self.push_segment(Segment::group(r"\t"));
        self
    }

    /// Tabs, repeated by the pending quantity.
    pub fn tabs(self) -> Self {
        self.like(PatternBuilder::new().tab())
    }

    /// A digit.
    pub fn digit(mut self) -> Self {
        self.push_segment(Segment::group(ASCII_DIGITS));
        self
    }

    /// A non-digit.
    pub fn not_digit(mut self) -> Self {
        self.push_segment(Segment::group(NOT_ASCII_DIGITS));
        self
    }

    /// Digits, repeated by the pending quantity.
    pub fn digits(self) -> Self {
        self.like(PatternBuilder::new().digit())
    }

    /// Non-digits, repeated by the pending quantity.
    pub fn not_digits(self) -> Self {
        self.like(PatternBuilder::new().not_digit())
    }

    /// Exactly one ASCII letter.
    pub fn letter(self) -> Self {
        self.exactly(1).letters()
    }

    /// Exactly one character which is not an ASCII letter.
    pub fn not_letter(self) -> Self {
        self.exactly(1).not_letters()
    }

    /// ASCII letters, repeated by the pending quantity.
    pub fn letters(self) -> Self {
        self.with_source(FragmentSource::Class(LETTERS.into()))
    }

    /// Non-letters, repeated by the pending quantity.
    pub fn not_letters(self) -> Self {
        self.with_source(FragmentSource::NotClass(LETTERS.into()))
    }

    /// Exactly one lower-case ASCII letter.
    pub fn lower_case_letter(self) -> Self {
        self.exactly(1).lower_case_letters()
    }

    /// Lower-case ASCII letters, repeated by the pending quantity.
    pub fn lower_case_letters(self) -> Self {
        self.with_source(FragmentSource::Class(LOWER_CASE_LETTERS.into()))
    }

    /// Exactly one upper-case ASCII letter.
    pub fn upper_case_letter(self) -> Self {
        self.exactly(1).upper_case_letters()
    }

    /// Upper-case ASCII letters, repeated by the pending quantity.
    pub fn upper_case_letters(self) -> Self {
        self.with_source(FragmentSource::Class(UPPER_CASE_LETTERS.into()))
    }

    /// Exactly one of `pattern`.
    pub fn append(
        self,
        pattern: PatternBuilder,
    ) -> Self {
        self.exactly(1).like(pattern)
    }

    /// Zero or one of `pattern`.
    pub fn optional(
        self,
        pattern: PatternBuilder,
    ) -> Self {
        self.max(1).like(pattern)
    }

    /// Hand `escape` to a pending quantity still waiting for content;
    /// otherwise emit it as a unit of its own.
    fn escape_unit(
        mut self,
        escape: &'static str,
    ) -> Self {
        if self.pending.has_quantity() && !self.pending.has_source() {
            self.with_source(FragmentSource::Like(escape.into()))
        } else {
            self.push_segment(Segment::group(escape));
            self
        }
    }
}
