//! # Text-or-Pattern Operands

use crate::{
    PatternBuilder,
    alloc::string::{String, ToString},
};

/// An argument which is either literal text or another pattern.
///
/// Text means "exactly one of the text".
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Literal text, escaped when rendered.
    Text(String),

    /// Another pattern, embedded as a sub-expression.
    Pattern(PatternBuilder),
}

impl Operand {
    /// Convert the operand into a builder.
    pub fn into_builder(self) -> PatternBuilder {
        match self {
            Self::Text(text) => PatternBuilder::new().then(&text),
            Self::Pattern(pattern) => pattern,
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Operand {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<char> for Operand {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<PatternBuilder> for Operand {
    fn from(pattern: PatternBuilder) -> Self {
        Self::Pattern(pattern)
    }
}
