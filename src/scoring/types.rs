//! Data types produced by the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::response::{Polarity, Response};

/// What to do with a row that cannot be turned into a [`Response`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole batch on the first invalid row.
    #[default]
    Abort,
    /// Drop the row and record it in [`ScoreSet::skipped`].
    Skip,
    /// Substitute the neutral rating for unusable answers.
    Coerce,
}

/// Knobs for turning raw records into scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub on_invalid_row: RowPolicy,
    /// Treat ratings outside `[1, 5]` as invalid (or clamp them under coerce).
    pub validate_range: bool,
}

/// A response that made it into the score set, with the data row it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse {
    pub row: usize,
    pub response: Response,
    pub score: f64,
}

/// A row dropped under [`RowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: String,
}

/// Scores in input order, one per accepted response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreSet {
    pub(crate) entries: Vec<ScoredResponse>,
    pub(crate) skipped: Vec<SkippedRow>,
}

impl ScoreSet {
    pub fn entries(&self) -> &[ScoredResponse] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    pub fn responses(&self) -> impl Iterator<Item = &Response> {
        self.entries.iter().map(|e| &e.response)
    }
}

/// Categorical reading of a mean score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub adjective: String,
    pub grade: String,
    pub acceptability: String,
}

/// Read-only snapshot over a score set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub rating: Rating,
}

/// Per-item statistics across all respondents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBreakdown {
    pub question: &'static str,
    pub polarity: Polarity,
    pub mean_rating: f64,
    pub mean_contribution: f64,
    pub median_contribution: f64,
    /// Most frequent contributions, first-seen order. Empty when all differ.
    pub modes: Vec<f64>,
}

/// Mean contribution of the positively and negatively worded items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityComparison {
    pub positive: f64,
    pub negative: f64,
}

/// One bar of the score histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBin {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}
