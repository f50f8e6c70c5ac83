//! Threshold tables mapping a SUS score to a label.
//!
//! Each table is a list of `(min, label)` bands plus a fallback label. A score
//! gets the label of the highest band whose `min` it reaches; scores below
//! every band get the fallback. Band order in the table does not matter.

use serde::{Deserialize, Serialize};

use crate::scoring::types::Rating;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub bands: Vec<Band>,
    pub fallback: String,
}

impl BandTable {
    pub fn new<L: Into<String>>(bands: impl IntoIterator<Item = (f64, L)>, fallback: L) -> Self {
        Self {
            bands: bands
                .into_iter()
                .map(|(min, label)| Band {
                    min,
                    label: label.into(),
                })
                .collect(),
            fallback: fallback.into(),
        }
    }

    pub fn classify(&self, score: f64) -> &str {
        self.bands
            .iter()
            .filter(|b| score >= b.min)
            .max_by(|a, b| a.min.total_cmp(&b.min))
            .map_or(self.fallback.as_str(), |b| b.label.as_str())
    }

    /// | Range  | Label            |
    /// |--------|------------------|
    /// | >= 85  | Excellent        |
    /// | >= 70  | Good             |
    /// | >= 50  | OK               |
    /// | >= 35  | Poor             |
    /// | < 35   | Worst Imaginable |
    pub fn adjective() -> Self {
        Self::new(
            [(85.0, "Excellent"), (70.0, "Good"), (50.0, "OK"), (35.0, "Poor")],
            "Worst Imaginable",
        )
    }

    /// | Range  | Grade |
    /// |--------|-------|
    /// | >= 85  | A     |
    /// | >= 70  | B     |
    /// | >= 50  | C     |
    /// | >= 35  | D     |
    /// | < 35   | F     |
    pub fn grade() -> Self {
        Self::new(
            [(85.0, "A"), (70.0, "B"), (50.0, "C"), (35.0, "D")],
            "F",
        )
    }

    /// | Range  | Band           |
    /// |--------|----------------|
    /// | >= 70  | Acceptable     |
    /// | >= 50  | Marginal       |
    /// | < 50   | Not Acceptable |
    pub fn acceptability() -> Self {
        Self::new([(70.0, "Acceptable"), (50.0, "Marginal")], "Not Acceptable")
    }

    /// Four-band adjective table: Excellent / Good / Okay / Poor.
    pub fn compact_adjective() -> Self {
        Self::new([(85.0, "Excellent"), (70.0, "Good"), (50.0, "Okay")], "Poor")
    }

    /// Four-band grade table without an F.
    pub fn compact_grade() -> Self {
        Self::new([(85.0, "A"), (70.0, "B"), (50.0, "C")], "D")
    }
}

/// Named sets of rating tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPreset {
    #[default]
    Standard,
    Compact,
}

/// The three tables applied to a mean score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTables {
    pub adjective: BandTable,
    pub grade: BandTable,
    pub acceptability: BandTable,
}

impl Default for RatingTables {
    fn default() -> Self {
        Self::preset(RatingPreset::Standard)
    }
}

impl RatingTables {
    pub fn preset(preset: RatingPreset) -> Self {
        match preset {
            RatingPreset::Standard => Self {
                adjective: BandTable::adjective(),
                grade: BandTable::grade(),
                acceptability: BandTable::acceptability(),
            },
            RatingPreset::Compact => Self {
                adjective: BandTable::compact_adjective(),
                grade: BandTable::compact_grade(),
                acceptability: BandTable::acceptability(),
            },
        }
    }

    pub fn rate(&self, score: f64) -> Rating {
        Rating {
            adjective: self.adjective.classify(score).to_string(),
            grade: self.grade.classify(score).to_string(),
            acceptability: self.acceptability.classify(score).to_string(),
        }
    }
}

/// Adjective label under the standard table.
pub fn adjective_rating(score: f64) -> String {
    BandTable::adjective().classify(score).to_string()
}

/// Letter grade under the standard table.
pub fn grade(score: f64) -> String {
    BandTable::grade().classify(score).to_string()
}

/// Acceptability band under the standard table.
pub fn acceptability(score: f64) -> String {
    BandTable::acceptability().classify(score).to_string()
}
