//! # Compiled Patterns

use crate::{
    alloc::{string::String, vec::Vec},
    errors::{RBResult, RegexBuilderError},
    flags::{PatternFlag, PatternFlags},
    regex::{PatternMatch, RegexWrapper},
};

/// A compiled pattern, with the flags it was built with.
///
/// The `g` flag has no inline form; it selects between first-match and
/// every-match behavior in [`CompiledPattern::find_all`] and
/// [`CompiledPattern::replace`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    regex: RegexWrapper,
    flags: PatternFlags,
}

impl CompiledPattern {
    /// Create a new `CompiledPattern`.
    ///
    /// ## Arguments
    /// * `regex` - the compiled regex; inline flags already applied.
    /// * `flags` - the pattern flags.
    pub fn new(
        regex: RegexWrapper,
        flags: PatternFlags,
    ) -> Self {
        Self { regex, flags }
    }

    /// The compiled regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// The pattern flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Is the `g` flag set?
    pub fn is_global(&self) -> bool {
        self.flags.contains(PatternFlag::Global)
    }

    /// The compiled pattern string, including any inline flag prefix.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Does the pattern match anywhere in `haystack`?
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> RBResult<bool> {
        Ok(self.regex.is_match(haystack)?)
    }

    /// Find the leftmost match in `haystack`.
    pub fn find<'h>(
        &self,
        haystack: &'h str,
    ) -> RBResult<Option<PatternMatch<'h>>> {
        Ok(self.regex.find(haystack)?)
    }

    /// Find the matches in `haystack`.
    ///
    /// ## Returns
    /// Every non-overlapping match when global, otherwise at most one.
    pub fn find_all<'h>(
        &self,
        haystack: &'h str,
    ) -> RBResult<Vec<PatternMatch<'h>>> {
        let limit = if self.is_global() { usize::MAX } else { 1 };
        let matches = self
            .regex
            .find_iter(haystack)
            .take(limit)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(matches)
    }

    /// Find the text captured by `group` in the leftmost match.
    ///
    /// ## Arguments
    /// * `haystack` - the text to search.
    /// * `group` - the group number; `0` is the whole match.
    ///
    /// ## Returns
    /// `Ok(None)` when nothing matches, or the group did not participate;
    /// [`RegexBuilderError::NoSuchGroup`] when the pattern has no such group.
    pub fn capture_group<'h>(
        &self,
        haystack: &'h str,
        group: usize,
    ) -> RBResult<Option<PatternMatch<'h>>> {
        let len = self.regex.captures_len();
        if group >= len {
            return Err(RegexBuilderError::NoSuchGroup { group, len });
        }
        Ok(self.regex.capture_group(haystack, group)?)
    }

    /// Replace matches with literal `replacement` text.
    ///
    /// Replaces every match when global, otherwise only the first.
    pub fn replace(
        &self,
        haystack: &str,
        replacement: &str,
    ) -> RBResult<String> {
        let limit = if self.is_global() { 0 } else { 1 };
        Ok(self.regex.replacen(haystack, limit, replacement)?)
    }
}
