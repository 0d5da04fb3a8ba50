//! # Pattern Builder
//!
//! [`PatternBuilder`] is the fluent surface of the crate. Each call either
//! mutates the [`PendingFragment`] and returns the builder, or flushes the
//! fragment into an emitted [`Segment`] before starting a new one.
//!
//! ```rust
//! use regexpbuilder::PatternBuilder;
//!
//! let built = PatternBuilder::new()
//!     .start_of_input()
//!     .exactly(3)
//!     .digits()
//!     .then("-")
//!     .end_of_input()
//!     .build();
//!
//! assert_eq!(
//!     built.literal(),
//!     "(?:^)(?:(?:(?:[0-9])){3,3})(?:(?:-){1,1})(?:$)"
//! );
//! ```

mod vocabulary;

use core::fmt::{Display, Formatter};

use crate::{
    alloc::{format, string::String, vec, vec::Vec},
    built_pattern::BuiltPattern,
    errors::RBResult,
    escape::{escape_inside_class, escape_outside_class},
    flags::{PatternFlag, PatternFlags},
    fragment::{FragmentSource, PendingFragment},
    operand::Operand,
    regex::CompiledPattern,
    renumber::{count_backreferences, renumber_backreferences},
    segment::{Opening, Segment},
};

/// Fluent builder for regex patterns.
///
/// Builders are consumed and returned by every call, and finished with
/// [`PatternBuilder::build`] or [`PatternBuilder::compile`].
///
/// Any builder may be embedded in another (see [`PatternBuilder::like`],
/// [`PatternBuilder::either`], [`PatternBuilder::ahead`], ...); the embedded
/// pattern's backreferences are renumbered to follow the host's groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternBuilder {
    segments: Vec<Segment>,
    groups_used: usize,
    flags: PatternFlags,
    pending: PendingFragment,
    either: Option<String>,
    fancy: bool,
}

impl PatternBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of capture groups introduced so far.
    ///
    /// Includes the groups of every embedded pattern.
    pub fn groups_used(&self) -> usize {
        self.groups_used
    }

    /// The accumulated flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Does the pattern need the extended (`fancy_regex`) engine?
    pub fn is_fancy(&self) -> bool {
        self.fancy
    }

    /// The emitted segments, excluding anything still pending.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The in-progress fragment.
    pub fn pending(&self) -> &PendingFragment {
        &self.pending
    }

    /// Render the current pattern literal.
    ///
    /// Pending state is rendered as if the builder were finished; the
    /// builder itself is unchanged.
    pub fn literal(&self) -> String {
        self.clone().build().into_literal()
    }

    /// Finish the builder.
    ///
    /// Flushes any pending state and concatenates the emitted segments.
    pub fn build(mut self) -> BuiltPattern {
        self.flush();
        self.discard_fragment();

        let mut literal = String::new();
        for segment in &self.segments {
            segment.render_into(&mut literal);
        }

        BuiltPattern::new(literal, self.flags, self.groups_used, self.fancy)
    }

    /// Finish the builder and compile the pattern.
    ///
    /// Engine failures surface unchanged as [`crate::RegexBuilderError::Engine`].
    pub fn compile(self) -> RBResult<CompiledPattern> {
        self.build().compile()
    }

    /// Emit the held `either` operand on its own.
    fn flush_either(&mut self) {
        if let Some(either) = self.either.take() {
            log::debug!("either without or; emitting (?:{either}) alone");
            self.segments.push(Segment::group(format!("(?:{either})")));
        }
    }

    /// Render the pending fragment, if it has content.
    ///
    /// A fragment without content keeps its quantity and modifiers.
    fn flush_fragment(&mut self) {
        let Some(segment) = self.pending.render() else {
            return;
        };
        log::trace!("flush: {segment}");
        self.segments.push(segment);
        self.pending = PendingFragment::default();
    }

    /// Flush all pending state, in emission order.
    fn flush(&mut self) {
        self.flush_either();
        self.flush_fragment();
    }

    /// Flush before a pattern is embedded as a unit of its own.
    ///
    /// A capture still waiting for content was counted ahead of the embedded
    /// groups, but would open after them; the fragment is dropped.
    fn flush_for_embed(&mut self) {
        self.flush();
        if self.pending.is_capture() {
            self.discard_fragment();
        }
    }

    /// Drop the pending fragment without rendering it.
    fn discard_fragment(&mut self) {
        debug_assert!(!self.pending.has_source(), "discarding a fragment with content");
        if self.pending.is_capture() {
            log::warn!("as_group() without content; the group and its quantity are dropped");
            debug_assert!(self.groups_used > 0);
            self.groups_used = self.groups_used.saturating_sub(1);
        }
        self.pending = PendingFragment::default();
    }

    /// Flush, then emit `segment`.
    fn push_segment(
        &mut self,
        segment: Segment,
    ) {
        self.flush();
        log::trace!("emit: {segment}");
        self.segments.push(segment);
    }

    /// Render `other` for embedding, renumbering its backreferences.
    ///
    /// Grows this builder's group count by the groups of `other`.
    fn embed(
        &mut self,
        other: PatternBuilder,
    ) -> String {
        let built = other.build();
        let scoped = built.scoped_literal();
        let literal = renumber_backreferences(&scoped, self.groups_used);
        debug_assert_eq!(count_backreferences(&scoped), count_backreferences(&literal));

        self.groups_used += built.groups();
        self.fancy |= built.is_fancy();
        literal
    }

    /// Set the pending content source; the first source set wins.
    fn with_source(
        mut self,
        source: FragmentSource,
    ) -> Self {
        self.pending.set_source(source);
        self
    }

    /// Add a flag.
    pub fn with_flag(
        mut self,
        flag: PatternFlag,
    ) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Match case-insensitively (`i`).
    pub fn ignore_case(self) -> Self {
        self.with_flag(PatternFlag::CaseInsensitive)
    }

    /// Let `^` / `$` match at line boundaries (`m`).
    pub fn multi_line(self) -> Self {
        self.with_flag(PatternFlag::MultiLine)
    }

    /// Find / replace every match, not just the first (`g`).
    pub fn global_match(self) -> Self {
        self.with_flag(PatternFlag::Global)
    }

    /// Anchor at the start of the input.
    pub fn start_of_input(mut self) -> Self {
        self.push_segment(Segment::group("^"));
        self
    }

    /// Anchor at the start of a line; implies [`PatternBuilder::multi_line`].
    pub fn start_of_line(self) -> Self {
        self.multi_line().start_of_input()
    }

    /// Anchor at the end of the input.
    pub fn end_of_input(mut self) -> Self {
        self.push_segment(Segment::group("$"));
        self
    }

    /// Anchor at the end of a line; implies [`PatternBuilder::multi_line`].
    pub fn end_of_line(self) -> Self {
        self.multi_line().end_of_input()
    }

    /// Start an alternation; the operand is held until [`PatternBuilder::or`].
    ///
    /// Text operands mean "exactly one of the text".
    pub fn either<O: Into<Operand>>(
        mut self,
        operand: O,
    ) -> Self {
        self.flush_for_embed();
        let literal = self.embed(Operand::into_builder(operand.into()));
        self.either = Some(literal);
        self
    }

    /// Add an alternative.
    ///
    /// After [`PatternBuilder::either`], emits `(?:(?:EITHER)|(?:OR))`.
    /// Otherwise the alternative is added to the most recently emitted unit,
    /// so `or` calls chain onto one group.
    pub fn or<O: Into<Operand>>(
        mut self,
        operand: O,
    ) -> Self {
        if self.pending.has_source() {
            // Content after `either` comes after it in the pattern.
            self.flush_either();
        }
        self.flush_fragment();
        if !self.pending.has_source() && self.pending.has_quantity() {
            log::warn!("quantity before or() has no content; it is dropped");
        }
        self.discard_fragment();

        let alternative = format!("(?:{})", self.embed(Operand::into_builder(operand.into())));

        match self.either.take() {
            Some(either) => {
                self.segments.push(Segment::new(
                    Opening::Group,
                    vec![format!("(?:{either})"), alternative],
                ));
            }
            None => match self.segments.last_mut() {
                Some(last) => last.push_alternative(alternative),
                None => {
                    log::warn!("or() with nothing before it; emitting the alternative alone");
                    self.segments.push(Segment::group(alternative));
                }
            },
        }
        self
    }

    /// Assert that the operand does not match here.
    pub fn neither<O: Into<Operand>>(
        self,
        operand: O,
    ) -> Self {
        self.not_ahead(Operand::into_builder(operand.into()))
    }

    /// Assert that the operand does not match here, then match anything.
    ///
    /// Chained `nor` calls share a single trailing "anything" run.
    pub fn nor<O: Into<Operand>>(
        mut self,
        operand: O,
    ) -> Self {
        if self.pending.is_open_any_run() {
            self.pending = PendingFragment::default();
        }
        self.neither(operand).min(0).of_any()
    }

    /// Start a unit repeated exactly `n` times.
    pub fn exactly(
        mut self,
        n: usize,
    ) -> Self {
        self.flush();
        self.pending.set_exact(n);
        self
    }

    /// Start a unit repeated at least `n` times.
    ///
    /// May be followed by [`PatternBuilder::max`] for a bounded range.
    pub fn min(
        mut self,
        n: usize,
    ) -> Self {
        self.flush();
        self.pending.set_min(n);
        self
    }

    /// Start a unit repeated at most `n` times.
    pub fn max(
        mut self,
        n: usize,
    ) -> Self {
        self.flush();
        self.pending.set_max(n);
        self
    }

    /// Set the unit's content to literal text.
    ///
    /// Empty text leaves the content unset.
    pub fn of(
        self,
        text: &str,
    ) -> Self {
        if text.is_empty() {
            log::warn!("of(\"\") leaves the content unset");
            return self;
        }
        self.with_source(FragmentSource::Text(escape_outside_class(text)))
    }

    /// Set the unit's content to any character.
    pub fn of_any(self) -> Self {
        self.with_source(FragmentSource::AnyChar)
    }

    /// Set the unit's content to a backreference to capture group `group`.
    ///
    /// Groups are numbered from 1; `0` leaves the content unset.
    pub fn of_group(
        mut self,
        group: usize,
    ) -> Self {
        if group == 0 {
            log::warn!("of_group(0) leaves the content unset; groups are numbered from 1");
            return self;
        }
        if self.pending.set_source(FragmentSource::GroupRef(group)) {
            self.fancy = true;
        }
        self
    }

    /// Set the unit's content to a class of the given characters.
    ///
    /// An empty class leaves the content unset.
    pub fn from_class(
        self,
        chars: &str,
    ) -> Self {
        if chars.is_empty() {
            log::warn!("from_class(\"\") leaves the content unset");
            return self;
        }
        self.with_source(FragmentSource::Class(escape_inside_class(chars)))
    }

    /// Set the unit's content to a class excluding the given characters.
    ///
    /// An empty class leaves the content unset.
    pub fn not_from_class(
        self,
        chars: &str,
    ) -> Self {
        if chars.is_empty() {
            log::warn!("not_from_class(\"\") leaves the content unset");
            return self;
        }
        self.with_source(FragmentSource::NotClass(escape_inside_class(chars)))
    }

    /// Set the unit's content to the character range `first..=last`.
    pub fn from_range(
        self,
        first: char,
        last: char,
    ) -> Self {
        let members = range_members(first, last);
        self.with_source(FragmentSource::Class(members))
    }

    /// Set the unit's content to anything outside the range `first..=last`.
    pub fn not_from_range(
        self,
        first: char,
        last: char,
    ) -> Self {
        let members = range_members(first, last);
        self.with_source(FragmentSource::NotClass(members))
    }

    /// Set the unit's content to another pattern.
    pub fn like(
        mut self,
        pattern: PatternBuilder,
    ) -> Self {
        if let Some(existing) = self.pending.source() {
            log::warn!("fragment already holds {existing:?}; dropping like() pattern");
            return self;
        }
        let literal = self.embed(pattern);
        self.with_source(FragmentSource::Like(literal))
    }

    /// Make the unit's quantifier non-greedy.
    pub fn reluctantly(mut self) -> Self {
        self.pending.set_reluctant();
        self
    }

    /// Assert that `pattern` matches here, without consuming it.
    pub fn ahead(
        self,
        pattern: PatternBuilder,
    ) -> Self {
        self.look_ahead(Opening::LookAhead, pattern)
    }

    /// Assert that `pattern` does not match here.
    pub fn not_ahead(
        self,
        pattern: PatternBuilder,
    ) -> Self {
        self.look_ahead(Opening::NegativeLookAhead, pattern)
    }

    fn look_ahead(
        mut self,
        opening: Opening,
        pattern: PatternBuilder,
    ) -> Self {
        self.flush_for_embed();
        let literal = self.embed(pattern);
        self.fancy = true;
        self.push_segment(Segment::new(opening, vec![literal]));
        self
    }

    /// Capture the unit in a numbered group.
    ///
    /// The group is counted when this is called.
    pub fn as_group(mut self) -> Self {
        if self.pending.set_capture() {
            self.groups_used += 1;
            // The new group opens before any embedded groups.
            self.pending.shift_embedded_groups(1);
        }
        self
    }
}

fn range_members(
    first: char,
    last: char,
) -> String {
    let mut buf = [0u8; 4];
    let first = escape_inside_class(first.encode_utf8(&mut buf));
    let last = escape_inside_class(last.encode_utf8(&mut buf));
    format!("{first}-{last}")
}

impl Display for PatternBuilder {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::ToString;

    fn literal(builder: PatternBuilder) -> String {
        builder.build().into_literal()
    }

    #[test]
    fn test_empty() {
        let built = PatternBuilder::new().build();
        assert_eq!(built.literal(), "");
        assert_eq!(built.groups(), 0);
        assert!(!built.is_fancy());
    }

    #[test]
    fn test_quantities() {
        assert_eq!(
            literal(PatternBuilder::new().exactly(3).of("p")),
            "(?:(?:p){3,3})"
        );
        assert_eq!(
            literal(PatternBuilder::new().min(2).of("p")),
            "(?:(?:p){2,})"
        );
        assert_eq!(
            literal(PatternBuilder::new().max(3).of("p")),
            "(?:(?:p){0,3})"
        );
        assert_eq!(
            literal(PatternBuilder::new().min(3).max(7).of("p")),
            "(?:(?:p){3,7})"
        );
    }

    #[test]
    fn test_quantity_flushes_previous_unit() {
        let builder = PatternBuilder::new().exactly(1).of("a").min(2);
        assert_eq!(builder.segments().len(), 1);
        assert_eq!(builder.pending().min(), Some(2));
        assert_eq!(literal(builder.of("b")), "(?:(?:a){1,1})(?:(?:b){2,})");
    }

    #[test]
    fn test_flag_calls_do_not_flush() {
        let builder = PatternBuilder::new().exactly(1).of("a").ignore_case();
        assert!(builder.segments().is_empty());
        assert!(builder.pending().has_source());
        assert_eq!(builder.flags().code(), "i");
    }

    #[test]
    fn test_of_escapes() {
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).of("a.b]")),
            r"(?:(?:a\.b\]){1,1})"
        );
    }

    #[test]
    fn test_class_escaping_differs_from_text() {
        let text = "a-b].";
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).of(text)),
            r"(?:(?:a-b\]\.){1,1})"
        );
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).from_class(text)),
            r"(?:(?:[a\-b\].]){1,1})"
        );
    }

    #[test]
    fn test_ranges() {
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).from_range('a', 'f')),
            "(?:(?:[a-f]){1,1})"
        );
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).not_from_range('0', '9')),
            "(?:(?:[^0-9]){1,1})"
        );
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).from_range('[', ']')),
            r"(?:(?:[\[-\]]){1,1})"
        );
    }

    #[test]
    fn test_first_source_wins() {
        let builder = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .of_any()
            .from_class("xyz");
        assert_eq!(literal(builder), "(?:(?:a){1,1})");
    }

    #[test]
    fn test_misuse_leaves_content_unset() {
        assert_eq!(literal(PatternBuilder::new().exactly(1).of("")), "");
        assert_eq!(literal(PatternBuilder::new().exactly(1).of_group(0)), "");
        assert_eq!(literal(PatternBuilder::new().exactly(1).from_class("")), "");
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).not_from_class("")),
            ""
        );
    }

    #[test]
    fn test_backreference() {
        let builder = PatternBuilder::new()
            .exactly(3)
            .of("p")
            .as_group()
            .exactly(1)
            .of("q")
            .exactly(1)
            .of_group(1);
        assert!(builder.is_fancy());
        assert_eq!(builder.groups_used(), 1);
        assert_eq!(
            literal(builder),
            r"((?:p){3,3})(?:(?:q){1,1})(?:(?:\1){1,1})"
        );
    }

    #[test]
    fn test_as_group_counts_once() {
        let builder = PatternBuilder::new().exactly(1).of("a").as_group().as_group();
        assert_eq!(builder.groups_used(), 1);
    }

    #[test]
    fn test_as_group_without_content_is_dropped() {
        let built = PatternBuilder::new().exactly(1).of("a").exactly(2).as_group().build();
        assert_eq!(built.groups(), 0);
        assert_eq!(built.literal(), "(?:(?:a){1,1})");
    }

    #[test]
    fn test_reluctant() {
        assert_eq!(
            literal(PatternBuilder::new().min(2).of_any().reluctantly()),
            "(?:(?:.){2,}?)"
        );
    }

    #[test]
    fn test_anchors() {
        let builder = PatternBuilder::new()
            .start_of_input()
            .exactly(1)
            .of("p")
            .end_of_input();
        assert!(builder.flags().is_empty());
        assert_eq!(literal(builder), "(?:^)(?:(?:p){1,1})(?:$)");

        let builder = PatternBuilder::new().start_of_line().exactly(1).of("p").end_of_line();
        assert_eq!(builder.flags().code(), "m");
    }

    #[test]
    fn test_start_of_input_flushes() {
        assert_eq!(
            literal(PatternBuilder::new().exactly(1).of("a").start_of_input()),
            "(?:(?:a){1,1})(?:^)"
        );
    }

    #[test]
    fn test_either_or() {
        assert_eq!(
            literal(PatternBuilder::new().either("cat").or("dog")),
            "(?:(?:(?:(?:cat){1,1}))|(?:(?:(?:dog){1,1})))"
        );
    }

    #[test]
    fn test_or_chain() {
        let builder = PatternBuilder::new().either("p").or("q").or("r");
        assert_eq!(builder.segments().len(), 1);
        assert_eq!(builder.segments()[0].alternatives().len(), 3);
        assert_eq!(
            literal(builder),
            "(?:(?:(?:(?:p){1,1}))|(?:(?:(?:q){1,1}))|(?:(?:(?:r){1,1})))"
        );
    }

    #[test]
    fn test_shorthand_or() {
        assert_eq!(
            literal(PatternBuilder::new().exactly(2).of("p").or("q")),
            "(?:(?:p){2,2}|(?:(?:(?:q){1,1})))"
        );
    }

    #[test]
    fn test_or_with_nothing_before() {
        assert_eq!(
            literal(PatternBuilder::new().or("q")),
            "(?:(?:(?:(?:q){1,1})))"
        );
    }

    #[test]
    fn test_either_without_or() {
        assert_eq!(
            literal(PatternBuilder::new().either("p")),
            "(?:(?:(?:(?:p){1,1})))"
        );
        assert_eq!(
            literal(PatternBuilder::new().either("p").exactly(1).of("q")),
            "(?:(?:(?:(?:p){1,1})))(?:(?:q){1,1})"
        );
    }

    #[test]
    fn test_lookahead() {
        let builder = PatternBuilder::new()
            .exactly(1)
            .of("dart")
            .ahead(PatternBuilder::new().exactly(1).of("lang"));
        assert!(builder.is_fancy());
        assert_eq!(literal(builder), "(?:(?:dart){1,1})(?=(?:(?:lang){1,1}))");

        assert_eq!(
            literal(
                PatternBuilder::new()
                    .exactly(1)
                    .of("dart")
                    .not_ahead(PatternBuilder::new().exactly(1).of("pqr"))
            ),
            "(?:(?:dart){1,1})(?!(?:(?:pqr){1,1}))"
        );
    }

    #[test]
    fn test_neither_nor() {
        assert_eq!(
            literal(PatternBuilder::new().neither("a")),
            "(?!(?:(?:a){1,1}))"
        );
        assert_eq!(
            literal(PatternBuilder::new().neither("a").nor("b").nor("c")),
            "(?!(?:(?:a){1,1}))(?!(?:(?:b){1,1}))(?!(?:(?:c){1,1}))(?:(?:.){0,})"
        );
    }

    #[test]
    fn test_renumbers_every_backreference() {
        let inner = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of("b")
            .as_group()
            .exactly(1)
            .of_group(1)
            .exactly(1)
            .of_group(2);
        assert_eq!(inner.groups_used(), 2);

        let outer = PatternBuilder::new()
            .exactly(1)
            .of("x")
            .as_group()
            .append(inner);
        assert_eq!(outer.groups_used(), 3);
        assert_eq!(
            literal(outer),
            r"((?:x){1,1})(?:(?:((?:a){1,1})((?:b){1,1})(?:(?:\2){1,1})(?:(?:\3){1,1})){1,1})"
        );
    }

    #[test]
    fn test_capture_around_embedded_pattern() {
        let inner = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of_group(1);

        // The wrapper group opens before the embedded group.
        let built = PatternBuilder::new().exactly(1).like(inner).as_group().build();
        assert_eq!(built.groups(), 2);
        assert_eq!(
            built.literal(),
            r"((?:((?:a){1,1})(?:(?:\2){1,1})){1,1})"
        );
    }

    #[test]
    fn test_embedded_flags_are_scoped() {
        let inner = PatternBuilder::new().ignore_case().exactly(1).of("a");
        let built = PatternBuilder::new().exactly(1).like(inner).build();
        assert!(built.flags().is_empty());
        assert_eq!(built.literal(), "(?:(?:(?i:(?:(?:a){1,1}))){1,1})");
    }

    #[test]
    fn test_contentless_capture_before_lookahead_is_dropped() {
        let inner = PatternBuilder::new()
            .exactly(1)
            .of("x")
            .as_group()
            .exactly(1)
            .of_group(1);
        let builder = PatternBuilder::new()
            .min(1)
            .as_group()
            .ahead(inner)
            .of("a");
        assert_eq!(builder.groups_used(), 1);

        let built = builder.build();
        assert_eq!(
            built.literal(),
            r"(?=((?:x){1,1})(?:(?:\1){1,1}))(?:(?:a))"
        );
        let compiled = built.compile().unwrap();
        assert!(!compiled.is_match("xxa").unwrap());
        assert_eq!(compiled.capture_group("a", 1).unwrap(), None);
    }

    #[test]
    fn test_contentless_capture_before_either_is_dropped() {
        let inner = PatternBuilder::new()
            .exactly(1)
            .of("x")
            .as_group()
            .exactly(1)
            .of_group(1);
        let builder = PatternBuilder::new()
            .min(1)
            .as_group()
            .either(inner)
            .or("y");
        assert_eq!(builder.groups_used(), 1);
        assert_eq!(
            builder.literal(),
            r"(?:(?:((?:x){1,1})(?:(?:\1){1,1}))|(?:(?:(?:y){1,1})))"
        );

        let compiled = builder.compile().unwrap();
        assert!(compiled.is_match("xx").unwrap());
        assert!(compiled.is_match("y").unwrap());
        assert!(!compiled.is_match("x").unwrap());
    }

    #[test]
    fn test_quantity_survives_lookahead() {
        let builder = PatternBuilder::new()
            .min(2)
            .ahead(PatternBuilder::new().exactly(1).of("a"))
            .of("a");
        assert_eq!(
            literal(builder),
            "(?=(?:(?:a){1,1}))(?:(?:a){2,})"
        );
    }

    #[test]
    fn test_literal_does_not_consume() {
        let builder = PatternBuilder::new().exactly(1).of("a");
        assert_eq!(builder.literal(), "(?:(?:a){1,1})");
        assert_eq!(builder.to_string(), "(?:(?:a){1,1})");
        assert!(builder.pending().has_source());
        assert_eq!(literal(builder.exactly(1).of("b")), "(?:(?:a){1,1})(?:(?:b){1,1})");
    }
}
