//! # Built Patterns
//!
//! A [`BuiltPattern`] is the finished output of a [`crate::PatternBuilder`]:
//! the pattern literal, its flags, and enough bookkeeping to embed it or to
//! pick an engine for it.

use core::fmt::{Display, Formatter};

use crate::{
    alloc::{format, string::String},
    errors::RBResult,
    flags::PatternFlags,
    regex::{CompiledPattern, RegexPattern},
};

/// A finished pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPattern {
    literal: String,
    flags: PatternFlags,
    groups: usize,
    fancy: bool,
}

impl BuiltPattern {
    /// Create a new `BuiltPattern`.
    ///
    /// ## Arguments
    /// * `literal` - the rendered pattern, without flags.
    /// * `flags` - the pattern flags.
    /// * `groups` - the number of capture groups in `literal`.
    /// * `fancy` - does `literal` need the extended engine?
    pub fn new(
        literal: String,
        flags: PatternFlags,
        groups: usize,
        fancy: bool,
    ) -> Self {
        Self {
            literal,
            flags,
            groups,
            fancy,
        }
    }

    /// The rendered pattern, without flags.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Unwrap the rendered pattern.
    pub fn into_literal(self) -> String {
        self.literal
    }

    /// The pattern flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// The flag code string, e.g. `"im"`.
    pub fn flag_code(&self) -> String {
        self.flags.code()
    }

    /// The number of capture groups.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Does the pattern need the extended (`fancy_regex`) engine?
    pub fn is_fancy(&self) -> bool {
        self.fancy
    }

    /// The literal with its inline flags scoped to it, e.g. `(?i:...)`.
    ///
    /// This is the form used when embedding in another pattern.
    pub fn scoped_literal(&self) -> String {
        let code = self.flags.inline_code();
        if code.is_empty() {
            self.literal.clone()
        } else {
            format!("(?{code}:{})", self.literal)
        }
    }

    /// The full pattern, with an inline flag prefix, labeled by engine.
    pub fn to_regex_pattern(&self) -> RegexPattern {
        let pattern = format!("{}{}", self.flags.inline_prefix(), self.literal);
        if self.fancy {
            RegexPattern::Fancy(pattern)
        } else {
            RegexPattern::Basic(pattern)
        }
    }

    /// Compile the pattern.
    pub fn compile(&self) -> RBResult<CompiledPattern> {
        let pattern = self.to_regex_pattern();
        let regex = pattern.compile()?;
        log::debug!(
            "compiled {:?} on the {} engine",
            regex.as_str(),
            if regex.is_fancy() { "fancy" } else { "basic" }
        );
        Ok(CompiledPattern::new(regex, self.flags))
    }
}

impl Display for BuiltPattern {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.literal)
    }
}
