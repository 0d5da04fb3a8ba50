//! # Emitted Segments
//!
//! A builder's pattern is the concatenation of its emitted [`Segment`]s.
//!
//! Each segment keeps its opening delimiter and its alternatives apart, and
//! only joins them when rendered; so a later `or` can add an alternative to
//! the last segment without re-parsing rendered text.

use core::fmt::{Display, Formatter};

use crate::alloc::{string::String, vec, vec::Vec};

/// The group construct which wraps a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opening {
    /// `(?:`
    Group,

    /// `(`
    Capture,

    /// `(?=`
    LookAhead,

    /// `(?!`
    NegativeLookAhead,
}

impl Opening {
    /// The opening delimiter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "(?:",
            Self::Capture => "(",
            Self::LookAhead => "(?=",
            Self::NegativeLookAhead => "(?!",
        }
    }
}

/// One emitted, finished piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    opening: Opening,
    alternatives: Vec<String>,
}

impl Segment {
    /// Create a new segment.
    ///
    /// ## Arguments
    /// * `opening` - the wrapping group construct.
    /// * `alternatives` - the alternatives; must not be empty.
    pub fn new(
        opening: Opening,
        alternatives: Vec<String>,
    ) -> Self {
        debug_assert!(!alternatives.is_empty(), "segment without alternatives");
        Self {
            opening,
            alternatives,
        }
    }

    /// A non-capturing group around `body`.
    pub fn group<S: Into<String>>(body: S) -> Self {
        Self::new(Opening::Group, vec![body.into()])
    }

    /// A capturing group around `body`.
    pub fn capture<S: Into<String>>(body: S) -> Self {
        Self::new(Opening::Capture, vec![body.into()])
    }

    /// The wrapping group construct.
    pub fn opening(&self) -> Opening {
        self.opening
    }

    /// The alternatives, in order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Add an alternative inside this segment's group.
    pub fn push_alternative<S: Into<String>>(
        &mut self,
        alternative: S,
    ) {
        self.alternatives.push(alternative.into());
    }

    /// Append the rendered segment to `out`.
    pub fn render_into(
        &self,
        out: &mut String,
    ) {
        out.push_str(self.opening.as_str());
        for (idx, alt) in self.alternatives.iter().enumerate() {
            if idx > 0 {
                out.push('|');
            }
            out.push_str(alt);
        }
        out.push(')');
    }
}

impl Display for Segment {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openings() {
        assert_eq!(Segment::group("a").to_string(), "(?:a)");
        assert_eq!(Segment::capture("a").to_string(), "(a)");
        assert_eq!(
            Segment::new(Opening::LookAhead, vec!["a".into()]).to_string(),
            "(?=a)"
        );
        assert_eq!(
            Segment::new(Opening::NegativeLookAhead, vec!["a".into()]).to_string(),
            "(?!a)"
        );
    }

    #[test]
    fn test_alternatives() {
        let mut segment = Segment::group("(?:a){1,1}");
        assert_eq!(segment.opening(), Opening::Group);
        segment.push_alternative("(?:b)");
        segment.push_alternative("(?:c)");
        assert_eq!(segment.alternatives().len(), 3);
        assert_eq!(segment.to_string(), "(?:(?:a){1,1}|(?:b)|(?:c))");
    }
}
