//! Questionnaire records: the untyped row handed over by ingestion and the
//! validated ten-rating response the scorer works on.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::ScoreError;

/// Number of items on the SUS questionnaire.
pub const QUESTION_COUNT: usize = 10;

/// Lowest and highest Likert rating.
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// Rating substituted for an unusable answer under the coerce policy.
pub const NEUTRAL_RATING: f64 = 3.0;

/// Column labels, `Q1` through `Q10`.
pub const QUESTION_LABELS: [&str; QUESTION_COUNT] =
    ["Q1", "Q2", "Q3", "Q4", "Q5", "Q6", "Q7", "Q8", "Q9", "Q10"];

/// Whether agreeing with an item reflects good (odd items) or poor (even
/// items) usability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Polarity of the item at zero-based `index`.
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Contribution of a single rating to the 0..=40 raw sum.
    pub fn contribution(self, rating: f64) -> f64 {
        match self {
            Polarity::Positive => rating - RATING_MIN,
            Polarity::Negative => RATING_MAX - rating,
        }
    }
}

/// One row as delivered by ingestion: named string fields plus the 1-based
/// data row it came from. Columns other than `Q1..Q10` are carried but ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub row: usize,
    fields: HashMap<String, String>,
}

impl RawResponse {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: HashMap::new(),
        }
    }

    /// Builds a record from `(column, value)` pairs.
    pub fn from_pairs<K, V, I>(row: usize, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            row,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a record from ten numeric ratings in question order.
    pub fn from_ratings(row: usize, ratings: [f64; QUESTION_COUNT]) -> Self {
        Self::from_pairs(
            row,
            QUESTION_LABELS
                .iter()
                .zip(ratings)
                .map(|(label, value)| (*label, value.to_string())),
        )
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Parses the rating for the item at zero-based `index`.
    ///
    /// # Errors
    ///
    /// [`ScoreError::InvalidInput`] when the field is absent, blank, or not a
    /// finite number.
    pub fn rating(&self, index: usize) -> Result<f64, ScoreError> {
        let Some(&label) = QUESTION_LABELS.get(index) else {
            return Err(ScoreError::invalid(
                self.row,
                format!("Q{}", index + 1),
                "no such question",
            ));
        };
        let raw = match self.field(label).map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => return Err(ScoreError::invalid(self.row, label, "missing value")),
        };

        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ScoreError::invalid(
                self.row,
                label,
                format!("not a number: {raw:?}"),
            )),
        }
    }
}

/// Ten ratings in question order. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Response {
    ratings: [f64; QUESTION_COUNT],
}

impl Response {
    pub fn new(ratings: [f64; QUESTION_COUNT]) -> Self {
        Self { ratings }
    }

    /// Validates a raw record, optionally rejecting ratings outside `[1, 5]`.
    pub fn from_raw(raw: &RawResponse, validate_range: bool) -> Result<Self, ScoreError> {
        let mut ratings = [0.0; QUESTION_COUNT];
        for (index, slot) in ratings.iter_mut().enumerate() {
            let value = raw.rating(index)?;
            if validate_range && !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(ScoreError::invalid(
                    raw.row,
                    QUESTION_LABELS[index],
                    format!("rating {value} outside [1, 5]"),
                ));
            }
            *slot = value;
        }
        Ok(Self { ratings })
    }

    /// Builds a response without failing: unusable answers become the neutral
    /// rating, and out-of-range answers are clamped when `clamp` is set.
    /// Returns the labels of the fields that were changed.
    pub fn coerce(raw: &RawResponse, clamp: bool) -> (Self, Vec<&'static str>) {
        let mut ratings = [NEUTRAL_RATING; QUESTION_COUNT];
        let mut adjusted = Vec::new();

        for (index, slot) in ratings.iter_mut().enumerate() {
            match raw.rating(index) {
                Ok(v) if clamp && !(RATING_MIN..=RATING_MAX).contains(&v) => {
                    *slot = v.clamp(RATING_MIN, RATING_MAX);
                    adjusted.push(QUESTION_LABELS[index]);
                }
                Ok(v) => *slot = v,
                Err(_) => adjusted.push(QUESTION_LABELS[index]),
            }
        }

        (Self { ratings }, adjusted)
    }

    pub fn ratings(&self) -> &[f64; QUESTION_COUNT] {
        &self.ratings
    }

    /// Per-item contributions, each in `[0, 4]` for in-range ratings.
    pub fn contributions(&self) -> [f64; QUESTION_COUNT] {
        let mut out = [0.0; QUESTION_COUNT];
        for (index, (slot, rating)) in out.iter_mut().zip(self.ratings).enumerate() {
            *slot = Polarity::of(index).contribution(rating);
        }
        out
    }

    /// The SUS score: sum of contributions scaled by 2.5. Not clamped.
    pub fn score(&self) -> f64 {
        self.contributions().iter().sum::<f64>() * 2.5
    }
}
