//! SUS score computation and summary statistics.
//!
//! This module turns raw questionnaire records into per-respondent scores,
//! summarizes a score set (mean, median, population standard deviation),
//! rates the mean against configurable threshold tables, and derives the
//! per-question breakdown and score histogram.

pub mod breakdown;
pub mod rating;
pub mod score;
pub mod summary;
pub mod types;
pub mod utility;

pub use rating::{BandTable, RatingPreset, RatingTables};
pub use score::{compute_score, compute_scores, compute_scores_with, select_respondent};
pub use summary::{summarize, summarize_with};
pub use types::{RowPolicy, ScoreSet, ScoringOptions, SummaryStatistics};
