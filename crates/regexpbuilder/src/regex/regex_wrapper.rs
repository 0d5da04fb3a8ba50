//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

use crate::alloc::{boxed::Box, string::String};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// A match, from either engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'h> {
    text: &'h str,
    start: usize,
    end: usize,
}

impl<'h> PatternMatch<'h> {
    /// The byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The byte offset of the end of the match.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'h str {
        self.text
    }

    /// The length of the match, in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Is the match empty?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<'h> From<regex::Match<'h>> for PatternMatch<'h> {
    fn from(m: regex::Match<'h>) -> Self {
        Self {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

impl<'h> From<fancy_regex::Match<'h>> for PatternMatch<'h> {
    fn from(m: fancy_regex::Match<'h>) -> Self {
        Self {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The number of capture groups, including the implicit group 0.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    /// Wrapper for `is_match`.
    ///
    /// ## Returns
    /// `true` if the pattern matches anywhere in `haystack`.
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> Result<bool, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.is_match(haystack)),
            Self::Fancy(regex) => Ok(regex.is_match(haystack)?),
        }
    }

    /// Wrapper for `find`.
    ///
    /// ## Returns
    /// The leftmost match in `haystack`, if any.
    pub fn find<'h>(
        &self,
        haystack: &'h str,
    ) -> Result<Option<PatternMatch<'h>>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.find(haystack).map(PatternMatch::from)),
            Self::Fancy(regex) => Ok(regex.find(haystack)?.map(PatternMatch::from)),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `MatchesWrapper` iterator over the matches.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }

    /// Find the text captured by `group` in the leftmost match.
    ///
    /// ## Returns
    /// `None` if there is no match, or the group did not participate.
    pub fn capture_group<'h>(
        &self,
        haystack: &'h str,
        group: usize,
    ) -> Result<Option<PatternMatch<'h>>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex
                .captures(haystack)
                .and_then(|caps| caps.get(group))
                .map(PatternMatch::from)),
            Self::Fancy(regex) => Ok(regex
                .captures(haystack)?
                .and_then(|caps| caps.get(group))
                .map(PatternMatch::from)),
        }
    }

    /// Replace up to `limit` matches with `replacement`; `0` replaces all.
    ///
    /// The replacement is literal text; `$` references are not expanded.
    pub fn replacen(
        &self,
        haystack: &str,
        limit: usize,
        replacement: &str,
    ) -> Result<String, ErrorWrapper> {
        let mut out = String::with_capacity(haystack.len());
        let mut last = 0;
        for (idx, m) in self.find_iter(haystack).enumerate() {
            if limit != 0 && idx == limit {
                break;
            }
            let m = m?;
            out.push_str(&haystack[last..m.start()]);
            out.push_str(replacement);
            last = m.end();
        }
        out.push_str(&haystack[last..]);
        Ok(out)
    }
}

/// Wrapper for regex matches.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Regex(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::FancyRegex(matches)
    }
}

impl<'r, 'h> Iterator for MatchesWrapper<'r, 'h> {
    type Item = Result<PatternMatch<'h>, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(|m| Ok(m.into())),
            Self::FancyRegex(matches) => matches
                .next()
                .map(|m| m.map(PatternMatch::from).map_err(ErrorWrapper::from)),
        }
    }
}
