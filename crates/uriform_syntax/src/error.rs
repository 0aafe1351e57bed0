//! URI syntax-failure diagnostics.

use serde::Serialize;
use thiserror::Error;

use crate::builder::UriSyntaxErrorBuilder;

/// Index value meaning "position not determined".
pub const INDEX_UNKNOWN: i32 = -1;

/// Reports that an input string failed to conform to URI grammar.
///
/// Carries the offending input, a human-readable reason, and the zero-based
/// character index where the failure was detected ([`INDEX_UNKNOWN`] when no
/// position could be determined). The value is immutable once constructed.
///
/// The display format is fixed as `input:reason` for compatibility with
/// existing consumers; the index never appears in the message even when
/// known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, miette::Diagnostic, Serialize)]
#[error("{input}:{reason}")]
pub struct UriSyntaxError {
    input: String,
    reason: String,
    index: i32,
}

/// Errors that can occur when constructing a [`UriSyntaxError`].
///
/// These are precondition violations on the caller's side, not recoverable
/// parse outcomes: construction fails instead of producing a malformed
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, miette::Diagnostic)]
pub enum ArgumentError {
    /// No input string was supplied.
    #[error("Missing input string")]
    MissingInput,

    /// No reason string was supplied.
    #[error("Missing reason string")]
    MissingReason,

    /// The failure index is below the unknown-position sentinel `-1`.
    #[error("Index {0} is less than -1")]
    IndexTooSmall(i32),
}

impl UriSyntaxError {
    /// Creates a syntax error with an unknown failure position.
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
            index: INDEX_UNKNOWN,
        }
    }

    /// Creates a syntax error localized to `index`.
    ///
    /// `index` is a zero-based position within `input`, or [`INDEX_UNKNOWN`].
    /// Fails with [`ArgumentError::IndexTooSmall`] when `index` is below the
    /// sentinel.
    pub fn with_index(
        input: impl Into<String>,
        reason: impl Into<String>,
        index: i32,
    ) -> Result<Self, ArgumentError> {
        if index < INDEX_UNKNOWN {
            return Err(ArgumentError::IndexTooSmall(index));
        }

        Ok(Self {
            input: input.into(),
            reason: reason.into(),
            index,
        })
    }

    /// Returns a builder for assembling a syntax error field by field.
    pub fn builder() -> UriSyntaxErrorBuilder {
        UriSyntaxErrorBuilder::default()
    }

    /// Returns the input string that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason parsing failed.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the zero-based failure position, or [`INDEX_UNKNOWN`].
    #[inline]
    pub const fn index(&self) -> i32 {
        self.index
    }
}
