use crate::error::ScoreError;
use crate::scoring::rating::RatingTables;
use crate::scoring::types::SummaryStatistics;
use crate::scoring::utility::{mean, median, stddev};

/// Summarizes scores using the standard rating tables.
pub fn summarize(scores: &[f64]) -> Result<SummaryStatistics, ScoreError> {
    summarize_with(scores, &RatingTables::default())
}

/// Computes mean, median, population standard deviation and range, and rates
/// the mean against `tables`.
///
/// # Errors
///
/// [`ScoreError::EmptyInput`] when `scores` is empty.
pub fn summarize_with(
    scores: &[f64],
    tables: &RatingTables,
) -> Result<SummaryStatistics, ScoreError> {
    let avg = mean(scores)?;
    let sd = stddev(scores, avg)?;
    let mid = median(scores)?;

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(SummaryStatistics {
        count: scores.len(),
        mean: avg,
        median: mid,
        std_dev: sd,
        min,
        max,
        rating: tables.rate(avg),
    })
}
