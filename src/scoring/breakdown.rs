//! Per-question statistics and the score histogram.

use crate::error::ScoreError;
use crate::response::{Polarity, QUESTION_COUNT, QUESTION_LABELS};
use crate::scoring::types::{DistributionBin, PolarityComparison, QuestionBreakdown, ScoreSet};
use crate::scoring::utility::{mean, median, modes};

/// Histogram bins as `(label, min, max)`. Ranges are half-open except the
/// last, which includes 100.
static DISTRIBUTION_BINS: &[(&str, f64, f64)] = &[
    ("Worst Imaginable", 0.0, 20.0),
    ("Poor", 20.0, 40.0),
    ("OK", 40.0, 60.0),
    ("Good", 60.0, 80.0),
    ("Excellent/Best Imaginable", 80.0, 100.0),
];

fn column(set: &ScoreSet, index: usize, contributions: bool) -> Vec<f64> {
    set.responses()
        .map(|r| {
            if contributions {
                r.contributions()[index]
            } else {
                r.ratings()[index]
            }
        })
        .collect()
}

/// Statistics for each of `Q1..Q10` across the set.
///
/// # Errors
///
/// [`ScoreError::EmptyInput`] when the set has no responses.
pub fn question_breakdown(set: &ScoreSet) -> Result<Vec<QuestionBreakdown>, ScoreError> {
    (0..QUESTION_COUNT)
        .map(|index| {
            let ratings = column(set, index, false);
            let contributions = column(set, index, true);

            Ok(QuestionBreakdown {
                question: QUESTION_LABELS[index],
                polarity: Polarity::of(index),
                mean_rating: mean(&ratings)?,
                mean_contribution: mean(&contributions)?,
                median_contribution: median(&contributions)?,
                modes: modes(&contributions),
            })
        })
        .collect()
}

/// Mean contribution of the odd (positive) and even (negative) items.
pub fn polarity_comparison(set: &ScoreSet) -> Result<PolarityComparison, ScoreError> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for response in set.responses() {
        for (index, c) in response.contributions().into_iter().enumerate() {
            match Polarity::of(index) {
                Polarity::Positive => positive.push(c),
                Polarity::Negative => negative.push(c),
            }
        }
    }

    Ok(PolarityComparison {
        positive: mean(&positive)?,
        negative: mean(&negative)?,
    })
}

/// Counts scores per histogram bin. Scores outside `[0, 100]` are not counted.
pub fn score_distribution(scores: &[f64]) -> Vec<DistributionBin> {
    let last = DISTRIBUTION_BINS.len() - 1;
    DISTRIBUTION_BINS
        .iter()
        .enumerate()
        .map(|(i, &(label, min, max))| {
            let count = scores
                .iter()
                .filter(|&&s| s >= min && (s < max || (i == last && s <= max)))
                .count();
            DistributionBin {
                label,
                min,
                max,
                count,
            }
        })
        .collect()
}
