//! # Pattern Flags
//!
//! Flags are a set; adding a flag twice is a no-op. They render in two forms:
//!
//! * a flag code string (`"im"`, `"g"`, ...), one letter per flag.
//! * an inline group prefix (`"(?im)"`) for the engines, which take flags
//!   inside the pattern rather than as a separate argument.

use core::fmt::{Display, Formatter};

use strum::IntoEnumIterator;

use crate::alloc::string::String;

/// A compile-time pattern modifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[non_exhaustive]
pub enum PatternFlag {
    /// Case-insensitive matching.
    #[strum(serialize = "i")]
    CaseInsensitive,

    /// `^` and `$` match at line boundaries.
    #[strum(serialize = "m")]
    MultiLine,

    /// Find / replace every match rather than the first.
    ///
    /// The Rust engines select this per call; it is carried on the
    /// compiled pattern rather than compiled into it.
    #[strum(serialize = "g")]
    Global,
}

impl PatternFlag {
    /// The single-letter flag code.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Can this flag be expressed as an inline group?
    pub fn is_inline(self) -> bool {
        !matches!(self, Self::Global)
    }

    fn bit(self) -> u8 {
        match self {
            Self::CaseInsensitive => 0b001,
            Self::MultiLine => 0b010,
            Self::Global => 0b100,
        }
    }
}

/// A set of [`PatternFlag`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternFlags {
    bits: u8,
}

impl PatternFlags {
    /// The empty flag set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Does the set contain `flag`?
    pub fn contains(
        &self,
        flag: PatternFlag,
    ) -> bool {
        self.bits & flag.bit() != 0
    }

    /// Add `flag` to the set.
    pub fn insert(
        &mut self,
        flag: PatternFlag,
    ) {
        self.bits |= flag.bit();
    }

    /// Add `flag` to the set.
    pub fn with(
        mut self,
        flag: PatternFlag,
    ) -> Self {
        self.insert(flag);
        self
    }

    /// Iterate the flags in the set, in canonical `i`, `m`, `g` order.
    pub fn iter(&self) -> impl Iterator<Item = PatternFlag> + '_ {
        PatternFlag::iter().filter(|flag| self.contains(*flag))
    }

    /// Render the flag code string, e.g. `"img"`.
    pub fn code(&self) -> String {
        self.iter().map(PatternFlag::code).collect()
    }

    /// Render the inline-flag letters, e.g. `"im"`.
    ///
    /// Flags without an inline form are skipped.
    pub fn inline_code(&self) -> String {
        self.iter()
            .filter(|flag| flag.is_inline())
            .map(PatternFlag::code)
            .collect()
    }

    /// Render the inline-flag prefix, e.g. `"(?im)"`; or `""`.
    pub fn inline_prefix(&self) -> String {
        let code = self.inline_code();
        if code.is_empty() {
            code
        } else {
            crate::alloc::format!("(?{code})")
        }
    }
}

impl From<PatternFlag> for PatternFlags {
    fn from(flag: PatternFlag) -> Self {
        Self::empty().with(flag)
    }
}

impl FromIterator<PatternFlag> for PatternFlags {
    fn from_iter<I: IntoIterator<Item = PatternFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl Display for PatternFlags {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.code())
    }
}
