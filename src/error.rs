//! Error kinds raised by the scoring core.

use thiserror::Error;

/// Failures the scorer reports to its caller.
///
/// CSV, file and CLI failures are not represented here; those layers use
/// `anyhow` and wrap a [`ScoreError`] when one surfaces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A record is missing a rating, holds a non-numeric rating, or (when
    /// range validation is on) holds a rating outside `[1, 5]`.
    #[error("invalid input in row {row}, field {field}: {reason}")]
    InvalidInput {
        row: usize,
        field: String,
        reason: String,
    },

    /// Statistics were requested over zero values.
    #[error("cannot compute statistics over an empty score set")]
    EmptyInput,
}

impl ScoreError {
    pub(crate) fn invalid(row: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoreError::InvalidInput {
            row,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoreError::InvalidInput { .. })
    }
}
