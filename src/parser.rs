//! CSV ingestion for questionnaire exports.
//!
//! Produces [`RawResponse`] records keyed by header name; turning their
//! fields into numbers is left to the scorer.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::response::RawResponse;

/// Reads header-keyed rows from CSV text. Row numbers start at 1 for the
/// first data row.
///
/// # Errors
///
/// Returns an error if the CSV itself is malformed (e.g. bad quoting or
/// invalid UTF-8).
pub fn parse_responses<R: Read>(reader: R) -> Result<Vec<RawResponse>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Malformed CSV at data row {}", i + 1))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(RawResponse::from_pairs(
            i + 1,
            headers.iter().zip(record.iter()),
        ));
    }

    debug!(rows = rows.len(), columns = headers.len(), "Parsed CSV responses");
    Ok(rows)
}

/// Opens and parses a CSV file.
pub fn load_responses(path: impl AsRef<Path>) -> Result<Vec<RawResponse>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_responses(file).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_keyed_rows() {
        let csv = "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10\n3,2,4,3,5,2,3,4,3,5\n5,1,5,1,5,1,5,1,5,1\n";
        let rows = parse_responses(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].field("Q5"), Some("5"));
        assert_eq!(rows[1].row, 2);
    }

    #[test]
    fn test_parse_ignores_extra_columns_and_order() {
        let csv = "Name, Q10 ,Q1\nalice, 4 ,2\n";
        let rows = parse_responses(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].field("Name"), Some("alice"));
        assert_eq!(rows[0].field("Q10"), Some("4"));
        assert_eq!(rows[0].field("Q1"), Some("2"));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let csv = "Q1,Q2\n1,2\n,\n\n3,4\n";
        let rows = parse_responses(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].row, 3);
    }

    #[test]
    fn test_parse_short_row_leaves_fields_missing() {
        let csv = "Q1,Q2,Q3\n1,2\n";
        let rows = parse_responses(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].field("Q3"), None);
    }

    #[test]
    fn test_parse_empty_input() {
        let rows = parse_responses("".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_responses("/nonexistent/sus.csv").is_err());
    }
}
