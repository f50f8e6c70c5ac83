use sus_scorer::ScoreError;
use sus_scorer::parser::load_responses;
use sus_scorer::report::build_report;
use sus_scorer::scoring::{
    RatingTables, RowPolicy, ScoringOptions, compute_scores, compute_scores_with, summarize,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/responses.csv");
const INVALID: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid.csv");
const EMPTY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/empty.csv");

#[test]
fn test_full_pipeline() {
    let records = load_responses(FIXTURE).expect("Failed to load fixture");
    let set = compute_scores(&records).expect("Failed to score fixture");

    assert_eq!(set.scores(), vec![55.0, 100.0, 50.0, 75.0]);

    let stats = summarize(&set.scores()).unwrap();
    assert_eq!(stats.mean, 70.0);
    assert_eq!(stats.median, 65.0);
    assert!((stats.std_dev - 387.5_f64.sqrt()).abs() < 1e-9);
    assert_eq!(stats.rating.adjective, "Good");
    assert_eq!(stats.rating.grade, "B");
    assert_eq!(stats.rating.acceptability, "Acceptable");

    let report = build_report(&set, &RatingTables::default()).unwrap();
    assert_eq!(report.respondents, 4);
    assert_eq!(report.scores[3].user, "User 4");
}

#[test]
fn test_invalid_row_policies() {
    let records = load_responses(INVALID).unwrap();

    let err = compute_scores(&records).unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidInput {
            row: 2,
            field: "Q2".to_string(),
            reason: "missing value".to_string(),
        }
    );

    let skip = ScoringOptions {
        on_invalid_row: RowPolicy::Skip,
        validate_range: false,
    };
    let skipped = compute_scores_with(&records, &skip).unwrap();
    assert_eq!(skipped.scores(), vec![50.0, 100.0]);
    assert_eq!(skipped.skipped()[0].row, 2);

    let coerce = ScoringOptions {
        on_invalid_row: RowPolicy::Coerce,
        validate_range: false,
    };
    let coerced = compute_scores_with(&records, &coerce).unwrap();
    assert_eq!(coerced.scores(), vec![50.0, 72.5, 100.0]);
}

#[test]
fn test_header_only_upload_is_empty_input() {
    let records = load_responses(EMPTY).unwrap();
    let set = compute_scores(&records).unwrap();
    assert!(set.is_empty());
    assert_eq!(summarize(&set.scores()), Err(ScoreError::EmptyInput));
}
