use tracing::{debug, warn};

use crate::error::ScoreError;
use crate::response::{RawResponse, Response};
use crate::scoring::types::{RowPolicy, ScoreSet, ScoredResponse, ScoringOptions, SkippedRow};

/// Scores a single record.
///
/// # Errors
///
/// [`ScoreError::InvalidInput`] if any of `Q1..Q10` is missing or not a number.
pub fn compute_score(raw: &RawResponse) -> Result<f64, ScoreError> {
    finite_score(raw.row, &Response::from_raw(raw, false)?)
}

/// Huge finite ratings can overflow the sum; such a score is rejected.
fn finite_score(row: usize, response: &Response) -> Result<f64, ScoreError> {
    let score = response.score();
    if score.is_finite() {
        Ok(score)
    } else {
        Err(ScoreError::invalid(row, "score", format!("score {score} is not finite")))
    }
}

/// Scores a batch, failing on the first invalid record.
pub fn compute_scores(records: &[RawResponse]) -> Result<ScoreSet, ScoreError> {
    compute_scores_with(records, &ScoringOptions::default())
}

/// Scores a batch under the given row policy. Output keeps input order.
pub fn compute_scores_with(
    records: &[RawResponse],
    options: &ScoringOptions,
) -> Result<ScoreSet, ScoreError> {
    let mut set = ScoreSet {
        entries: Vec::with_capacity(records.len()),
        skipped: Vec::new(),
    };

    for raw in records {
        let validated = Response::from_raw(raw, options.validate_range)
            .and_then(|r| finite_score(raw.row, &r).map(|score| (r, score)));

        let (response, score) = match options.on_invalid_row {
            RowPolicy::Abort => validated?,
            RowPolicy::Skip => match validated {
                Ok(scored) => scored,
                Err(e) => {
                    warn!(row = raw.row, error = %e, "Skipping invalid row");
                    set.skipped.push(SkippedRow {
                        row: raw.row,
                        reason: e.to_string(),
                    });
                    continue;
                }
            },
            RowPolicy::Coerce => {
                let (mut r, adjusted) = Response::coerce(raw, options.validate_range);
                if !adjusted.is_empty() {
                    warn!(row = raw.row, fields = ?adjusted, "Coerced invalid ratings");
                }
                if !r.score().is_finite() {
                    warn!(row = raw.row, "Clamped ratings to keep the score finite");
                    r = Response::coerce(raw, true).0;
                }
                (r, r.score())
            }
        };

        set.entries.push(ScoredResponse {
            row: raw.row,
            response,
            score,
        });
    }

    debug!(
        input = records.len(),
        scored = set.entries.len(),
        skipped = set.skipped.len(),
        policy = ?options.on_invalid_row,
        "Computed SUS scores"
    );

    Ok(set)
}

/// Restricts a score set to the respondent shown as `User {user}` (1-based).
pub fn select_respondent(set: &ScoreSet, user: usize) -> Result<ScoreSet, ScoreError> {
    let entry = user
        .checked_sub(1)
        .and_then(|i| set.entries.get(i))
        .ok_or_else(|| {
            ScoreError::invalid(
                user,
                "user",
                format!("no respondent {user} among {}", set.entries.len()),
            )
        })?;

    Ok(ScoreSet {
        entries: vec![entry.clone()],
        skipped: set.skipped.clone(),
    })
}
