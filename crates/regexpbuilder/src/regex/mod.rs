//! # Regex Engine Support
//!
//! Patterns are compiled by `regex` when possible, and by `fancy_regex`
//! when they use backreferences or lookahead.
//!
//! * [`RegexPattern`] - a pattern string labeled with the engine it needs.
//! * [`RegexWrapper`] - a compiled regex from either engine.
//! * [`CompiledPattern`] - a compiled regex plus the builder's flags.

mod compiled_pattern;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use compiled_pattern::*;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
