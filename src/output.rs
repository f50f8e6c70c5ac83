//! Output formatting and persistence for score sets and reports.
//!
//! Supports JSON serialization and CSV export of the score table,
//! optionally gzip-compressed.

use anyhow::Result;
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::report::user_label;
use crate::response::{QUESTION_COUNT, QUESTION_LABELS};
use crate::scoring::types::ScoreSet;
use crate::scoring::utility::mean;

/// Serializes any value as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes a value as pretty-printed JSON to `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_json(value)?)?;
    info!(path = %path.display(), "Wrote JSON report");
    Ok(())
}

fn cell(value: f64) -> String {
    format!("{value:.2}")
}

/// Writes the score table: one row per respondent with the ten adjusted
/// contributions and the SUS score, followed by an `Average` row.
///
/// # Errors
///
/// Fails on I/O errors and on an empty score set (no average exists).
pub fn write_score_table<W: Write>(writer: W, set: &ScoreSet) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header = vec!["User"];
    header.extend(QUESTION_LABELS);
    header.push("SUS Score");
    wtr.write_record(&header)?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(set.len()); QUESTION_COUNT];

    for (i, entry) in set.entries().iter().enumerate() {
        let contributions = entry.response.contributions();
        let mut record = vec![user_label(i)];
        for (column, c) in columns.iter_mut().zip(contributions) {
            column.push(c);
            record.push(cell(c));
        }
        record.push(cell(entry.score));
        wtr.write_record(&record)?;
    }

    let mut average = vec!["Average".to_string()];
    for column in &columns {
        average.push(cell(mean(column)?));
    }
    average.push(cell(mean(&set.scores())?));
    wtr.write_record(&average)?;

    wtr.flush()?;
    Ok(())
}

/// Exports the score table to `path`, gzip-compressed when `gzip` is set
/// (a `.gz` suffix is added if missing). Returns the path written.
pub fn export_score_table(path: impl AsRef<Path>, set: &ScoreSet, gzip: bool) -> Result<PathBuf> {
    let mut path = path.as_ref().to_path_buf();
    if gzip && path.extension().and_then(|e| e.to_str()) != Some("gz") {
        let mut name = path.clone().into_os_string();
        name.push(".gz");
        path = PathBuf::from(name);
    }

    let file = File::create(&path)?;
    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_score_table(&mut encoder, set)?;
        encoder.finish()?;
    } else {
        write_score_table(file, set)?;
    }

    info!(path = %path.display(), rows = set.len(), gzip, "Exported score table");
    Ok(path)
}
