//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from regexpbuilder operations.
///
/// Building a pattern never fails; errors only arise when a pattern meets
/// an engine.
#[derive(Debug, thiserror::Error)]
pub enum RegexBuilderError {
    /// The engine rejected the pattern, or failed while matching.
    #[error(transparent)]
    Engine(#[from] ErrorWrapper),

    /// A capture group beyond the groups of the pattern.
    #[error("capture group {group} out of range ({len} groups)")]
    NoSuchGroup {
        /// The requested group.
        group: usize,

        /// The number of groups, including the implicit group 0.
        len: usize,
    },
}

/// Result type for regexpbuilder operations.
pub type RBResult<T> = core::result::Result<T, RegexBuilderError>;
