//! Report assembly and plain-text interpretation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::error::ScoreError;
use crate::scoring::breakdown::{polarity_comparison, question_breakdown, score_distribution};
use crate::scoring::rating::RatingTables;
use crate::scoring::summary::summarize_with;
use crate::scoring::types::{
    DistributionBin, PolarityComparison, QuestionBreakdown, ScoreSet, SkippedRow,
    SummaryStatistics,
};

/// Score of one respondent as shown in tables (`User 1`, `User 2`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentScore {
    pub user: String,
    pub row: usize,
    pub score: f64,
}

/// Everything derived from one upload.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub respondents: usize,
    pub skipped: Vec<SkippedRow>,
    pub scores: Vec<RespondentScore>,
    pub summary: SummaryStatistics,
    pub questions: Vec<QuestionBreakdown>,
    pub polarity: PolarityComparison,
    pub distribution: Vec<DistributionBin>,
}

/// Which optional sections the text report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSections {
    pub summary: bool,
    pub median_scores: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            summary: true,
            median_scores: false,
        }
    }
}

pub fn user_label(index: usize) -> String {
    format!("User {}", index + 1)
}

/// Builds the full report for a score set.
///
/// # Errors
///
/// [`ScoreError::EmptyInput`] when the set has no responses.
pub fn build_report(set: &ScoreSet, tables: &RatingTables) -> Result<ScoreReport, ScoreError> {
    let scores = set.scores();

    Ok(ScoreReport {
        generated_at: Utc::now(),
        respondents: set.len(),
        skipped: set.skipped().to_vec(),
        scores: set
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| RespondentScore {
                user: user_label(i),
                row: e.row,
                score: e.score,
            })
            .collect(),
        summary: summarize_with(&scores, tables)?,
        questions: question_breakdown(set)?,
        polarity: polarity_comparison(set)?,
        distribution: score_distribution(&scores),
    })
}

/// The interpretation panel as lines of text.
pub fn render_interpretation(summary: &SummaryStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Interpretation");
    let _ = writeln!(out, "SUS Score: {:.2}", summary.mean);
    let _ = writeln!(out, "Median: {:.2}", summary.median);
    let _ = writeln!(out, "Standard Deviation: {:.2}", summary.std_dev);
    let _ = writeln!(out, "Adjective Rating: {}", summary.rating.adjective);
    let _ = writeln!(out, "Grade: {}", summary.rating.grade);
    let _ = writeln!(out, "Acceptability: {}", summary.rating.acceptability);
    out
}

/// Renders the text report with the requested sections.
pub fn render_text(report: &ScoreReport, sections: ReportSections) -> String {
    let mut out = String::from("SUS Analysis Report\n");

    if sections.summary {
        out.push('\n');
        out.push_str(&render_interpretation(&report.summary));
    }

    if sections.median_scores {
        out.push_str("\nMedian Scores:\n");
        for q in &report.questions {
            let _ = writeln!(out, "{}: {:.2}", q.question, q.median_contribution);
        }
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(out, "\nSkipped rows: {}", report.skipped.len());
        for s in &report.skipped {
            let _ = writeln!(out, "  row {}: {}", s.row, s.reason);
        }
    }

    out
}
