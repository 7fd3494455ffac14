//! # Error Types
//!
//! ## Overview
//!
//! This module contains error types that group together the more specific errors returned
//! by pattern compilation and completion sources in this crate.

/// Errors returned while turning an input token into a candidate pattern.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PatternError {
    /// Failure due to a bad regular expression.
    #[error("Invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Failure due to a token that no pattern can be built from.
    #[error("Cannot build a pattern from token {0:?}")]
    UnusableToken(String),
}

/// Errors returned while enumerating candidates from a completion source.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SourceError {
    /// Failure during Input/Output.
    #[error("Input/Output Error: {0}")]
    IOError(#[from] std::io::Error),

    /// Generic failure.
    #[error("Error: {0}")]
    Failure(String),
}

/// Wrapper for the errors that can interrupt a completion attempt.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CompleteError {
    /// Failure while compiling a pattern for the current token.
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Failure while enumerating candidates.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Common result type for pattern compilation.
pub type PatternResult<V> = Result<V, PatternError>;

/// Common result type for candidate enumeration.
pub type SourceResult<V> = Result<V, SourceError>;

/// Common result type for completion attempts.
pub type CompleteResult<V> = Result<V, CompleteError>;
