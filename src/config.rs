use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::scoring::rating::{BandTable, RatingPreset, RatingTables};
use crate::scoring::types::{RowPolicy, ScoringOptions};

/// Scorer settings, stored as a JSON object on disk. Every key is optional:
/// ```json
/// {
///   "on_invalid_row": "skip",
///   "validate_range": true,
///   "preset": "standard",
///   "ratings": {
///     "adjective": {
///       "bands": [{ "min": 85, "label": "Best Imaginable" }],
///       "fallback": "Not great"
///     }
///   }
/// }
/// ```
/// Tables given under `ratings` replace the matching table of `preset`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub on_invalid_row: RowPolicy,
    pub validate_range: bool,
    pub preset: RatingPreset,
    pub ratings: RatingOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingOverrides {
    pub adjective: Option<BandTable>,
    pub grade: Option<BandTable>,
    pub acceptability: Option<BandTable>,
}

impl ScorerConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let tables = [
            ("adjective", &self.ratings.adjective),
            ("grade", &self.ratings.grade),
            ("acceptability", &self.ratings.acceptability),
        ];
        for (name, table) in tables {
            if let Some(table) = table {
                if table.fallback.is_empty() || table.bands.iter().any(|b| b.label.is_empty()) {
                    anyhow::bail!("Rating table `{name}` has an empty label");
                }
            }
        }
        Ok(())
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            on_invalid_row: self.on_invalid_row,
            validate_range: self.validate_range,
        }
    }

    pub fn rating_tables(&self) -> RatingTables {
        let mut tables = RatingTables::preset(self.preset);
        if let Some(t) = &self.ratings.adjective {
            tables.adjective = t.clone();
        }
        if let Some(t) = &self.ratings.grade {
            tables.grade = t.clone();
        }
        if let Some(t) = &self.ratings.acceptability {
            tables.acceptability = t.clone();
        }
        tables
    }
}
