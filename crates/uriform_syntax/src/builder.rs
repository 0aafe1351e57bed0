//! Field-by-field construction of [`UriSyntaxError`].

use crate::error::{ArgumentError, INDEX_UNKNOWN, UriSyntaxError};

/// Builder for [`UriSyntaxError`].
///
/// Unlike the direct constructors, a builder can be passed around while
/// partially filled; [`build`](Self::build) rejects incomplete or invalid
/// state instead of producing a malformed value.
#[derive(Debug, Clone, Default)]
pub struct UriSyntaxErrorBuilder {
    input: Option<String>,
    reason: Option<String>,
    index: Option<i32>,
}

impl UriSyntaxErrorBuilder {
    /// Sets the input string that failed to parse.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the human-readable failure reason.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the zero-based failure position.
    pub fn index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }

    /// Builds the syntax error.
    ///
    /// Fails with [`ArgumentError::MissingInput`] or
    /// [`ArgumentError::MissingReason`] when a required field is unset
    /// (input is checked first), and with [`ArgumentError::IndexTooSmall`]
    /// when the index is below `-1`. An unset index defaults to
    /// [`INDEX_UNKNOWN`].
    pub fn build(self) -> Result<UriSyntaxError, ArgumentError> {
        let input = self.input.ok_or(ArgumentError::MissingInput)?;
        let reason = self.reason.ok_or(ArgumentError::MissingReason)?;

        UriSyntaxError::with_index(input, reason, self.index.unwrap_or(INDEX_UNKNOWN))
    }
}
