//! # Pending Fragment
//!
//! A [`PendingFragment`] accumulates the next unit of a pattern across
//! chained builder calls: a quantity, one content source, and the capture
//! and reluctant modifiers. It renders to a [`Segment`] when flushed.

use crate::{
    alloc::{format, string::String},
    segment::Segment,
};

/// The content of a [`PendingFragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentSource {
    /// Escaped literal text.
    Text(String),

    /// Any single character (`.`).
    AnyChar,

    /// Escaped class members (`[...]`).
    Class(String),

    /// Escaped class members (`[^...]`).
    NotClass(String),

    /// A backreference to a capture group; always `>= 1`.
    GroupRef(usize),

    /// A rendered and renumbered sub-pattern.
    Like(String),
}

impl FragmentSource {
    /// Render the content literal.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::AnyChar => ".".into(),
            Self::Class(members) => format!("[{members}]"),
            Self::NotClass(members) => format!("[^{members}]"),
            Self::GroupRef(group) => format!("\\{group}"),
            Self::Like(literal) => literal.clone(),
        }
    }

    /// Does this source need the extended engine?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::GroupRef(_))
    }
}

/// The in-progress unit of a pattern.
///
/// A fresh fragment is empty: no quantity, no source, no modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingFragment {
    min: Option<usize>,
    max: Option<usize>,
    source: Option<FragmentSource>,
    reluctant: bool,
    capture: bool,
}

impl PendingFragment {
    /// The lower repeat bound, if set.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// The upper repeat bound, if set.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// The content source, if set.
    pub fn source(&self) -> Option<&FragmentSource> {
        self.source.as_ref()
    }

    /// Does the fragment have a content source?
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Does the fragment have any quantity bound?
    pub fn has_quantity(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Will the fragment render as a capturing group?
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Will the fragment render a non-greedy quantifier?
    pub fn is_reluctant(&self) -> bool {
        self.reluctant
    }

    /// Is this exactly the trailing "zero or more of anything" run?
    pub fn is_open_any_run(&self) -> bool {
        self.min == Some(0)
            && self.max.is_none()
            && self.source == Some(FragmentSource::AnyChar)
            && !self.capture
            && !self.reluctant
    }

    /// Set an exact repeat count.
    pub fn set_exact(
        &mut self,
        n: usize,
    ) {
        self.min = Some(n);
        self.max = Some(n);
    }

    /// Set the lower repeat bound.
    pub fn set_min(
        &mut self,
        n: usize,
    ) {
        self.min = Some(n);
    }

    /// Set the upper repeat bound.
    pub fn set_max(
        &mut self,
        n: usize,
    ) {
        self.max = Some(n);
    }

    /// Set the content source; the first source set wins.
    ///
    /// ## Returns
    /// `true` if the source was taken, `false` if one was already set.
    pub fn set_source(
        &mut self,
        source: FragmentSource,
    ) -> bool {
        if let Some(existing) = &self.source {
            log::warn!("fragment already holds {existing:?}; dropping {source:?}");
            return false;
        }
        self.source = Some(source);
        true
    }

    /// Mark the quantifier non-greedy.
    pub fn set_reluctant(&mut self) {
        self.reluctant = true;
    }

    /// Mark the fragment as a capturing group.
    ///
    /// ## Returns
    /// `true` if this call introduced a new group.
    pub fn set_capture(&mut self) -> bool {
        !core::mem::replace(&mut self.capture, true)
    }

    /// Shift the backreferences of an embedded sub-pattern.
    ///
    /// Used when a capture wrapper is opened around content that was
    /// renumbered before the wrapper existed.
    pub fn shift_embedded_groups(
        &mut self,
        offset: usize,
    ) {
        if let Some(FragmentSource::Like(literal)) = &mut self.source {
            *literal = crate::renumber::renumber_backreferences(literal, offset);
        }
    }

    /// Render the quantity suffix.
    ///
    /// An unquantified unit renders no suffix, and matches exactly once.
    pub fn quantity_literal(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{{{min},{max}}}"),
            (Some(min), None) => format!("{{{min},}}"),
            (None, Some(max)) => format!("{{0,{max}}}"),
            (None, None) => String::new(),
        }
    }

    /// Render the fragment, if it has content.
    ///
    /// The layout is: group open, `(?:CONTENT)`, quantity, reluctant marker,
    /// group close.
    pub fn render(&self) -> Option<Segment> {
        let source = self.source.as_ref()?;

        let quantity = self.quantity_literal();
        let reluctant = match (self.reluctant, quantity.is_empty()) {
            (true, false) => "?",
            (true, true) => {
                log::warn!("reluctant marker on an unquantified unit is ignored");
                ""
            }
            (false, _) => "",
        };

        let body = format!("(?:{}){quantity}{reluctant}", source.render());
        Some(if self.capture {
            Segment::capture(body)
        } else {
            Segment::group(body)
        })
    }
}
