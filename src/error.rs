//! Error types.

use thiserror::Error;

/// An error occurred when standardizing a URI.
///
/// Malformed URIs are not diagnosed: they standardize into a string that
/// simply fails to match its well-formed counterparts. This type covers the
/// few cases where no standardized string is produced at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum StandardizeError {
    /// The input string is empty.
    #[error("cannot standardize an empty URI")]
    EmptyInput,
    /// An underflow occurred in path normalization.
    ///
    /// Used only when [`Standardizer::allow_path_underflow`] is set to `false`.
    ///
    /// [`Standardizer::allow_path_underflow`]: crate::Standardizer::allow_path_underflow
    #[error("underflow occurred in path normalization")]
    PathUnderflow,
}
