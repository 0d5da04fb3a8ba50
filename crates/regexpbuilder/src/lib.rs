//! # `regexpbuilder` Fluent Regex Builder
//!
//! Build regular expressions from chained, readable calls instead of
//! hand-written pattern strings.
//!
//! ```rust
//! use regexpbuilder::PatternBuilder;
//!
//! let compiled = PatternBuilder::new()
//!     .either("cat")
//!     .or("dog")
//!     .compile()
//!     .unwrap();
//!
//! assert!(compiled.is_match("hotdog").unwrap());
//! assert!(!compiled.is_match("cow").unwrap());
//! ```
//!
//! See:
//! * [`PatternBuilder`] for the builder vocabulary.
//! * [`factory`] for free functions which start a builder.
//! * [`BuiltPattern`] for the finished pattern literal and flags.
//! * [`regex`] for compiling and matching.
//!
//! Every unit is wrapped in a non-capturing group, so builders compose
//! without precedence surprises; and any builder may be embedded in
//! another, with its backreferences renumbered to fit.
//!
//! Patterns which use backreferences or lookahead are compiled with
//! `fancy_regex`; everything else stays on the standard `regex` crate.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

extern crate alloc;

mod builder;
mod built_pattern;
mod errors;
mod operand;

pub mod escape;
pub mod factory;
pub mod flags;
pub mod fragment;
pub mod regex;
pub mod renumber;
pub mod segment;

#[doc(inline)]
pub use builder::PatternBuilder;
#[doc(inline)]
pub use built_pattern::BuiltPattern;
#[doc(inline)]
pub use errors::{RBResult, RegexBuilderError};
#[doc(inline)]
pub use flags::{PatternFlag, PatternFlags};
#[doc(inline)]
pub use operand::Operand;
#[doc(inline)]
pub use regex::CompiledPattern;
