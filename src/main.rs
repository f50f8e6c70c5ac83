//! CLI entry point for the SUS scorer.
//!
//! Provides subcommands for scoring a CSV of System Usability Scale
//! responses, producing a text or JSON report, and exporting the score table.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use sus_scorer::{
    config::ScorerConfig,
    output::{export_score_table, to_json, write_json},
    parser::load_responses,
    report::{ReportSections, ScoreReport, build_report, render_interpretation, render_text},
    scoring::{RatingPreset, RatingTables, RowPolicy, ScoreSet, compute_scores_with, select_respondent},
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sus_scorer")]
#[command(about = "Score System Usability Scale survey responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each respondent's SUS score and the interpretation
    Score {
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Produce a text or JSON report
    Report {
        #[command(flatten)]
        scoring: ScoringArgs,

        /// Emit the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Include per-question median contributions
        #[arg(long, default_value_t = false)]
        include_median: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the score table (adjusted contributions, scores, averages) as CSV
    Export {
        #[command(flatten)]
        scoring: ScoringArgs,

        /// CSV file to write
        #[arg(short, long, default_value = "SUS_Data.csv")]
        output: PathBuf,

        /// Gzip compress the CSV
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
}

#[derive(Args)]
struct ScoringArgs {
    /// CSV file with Q1..Q10 columns
    #[arg(value_name = "CSV")]
    input: PathBuf,

    /// JSON config file
    #[arg(short, long, env = "SUS_CONFIG")]
    config: Option<PathBuf>,

    /// What to do with rows that have missing or non-numeric ratings
    #[arg(long, value_enum)]
    on_invalid_row: Option<PolicyArg>,

    /// Treat ratings outside 1..=5 as invalid
    #[arg(long, default_value_t = false)]
    validate_range: bool,

    /// Rating table set
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Restrict output to one respondent (1-based)
    #[arg(short, long)]
    user: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Abort,
    Skip,
    Coerce,
}

impl From<PolicyArg> for RowPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Abort => RowPolicy::Abort,
            PolicyArg::Skip => RowPolicy::Skip,
            PolicyArg::Coerce => RowPolicy::Coerce,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Standard,
    Compact,
}

impl From<PresetArg> for RatingPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Standard => RatingPreset::Standard,
            PresetArg::Compact => RatingPreset::Compact,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: stderr, plus a JSON rolling log file when LOG_FILE_PATH is set
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::INFO));

    let mut _file_guard = None;
    let json_layer = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("sus_scorer.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            _file_guard = Some(guard);

            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(non_blocking_file)
                    .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG)),
            )
        }
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { scoring } => {
            let (set, tables) = score_input(&scoring)?;
            let report = build_report(&set, &tables)?;

            for s in &report.scores {
                println!("{}\t{:.2}", s.user, s.score);
            }
            println!();
            print!("{}", render_interpretation(&report.summary));
        }
        Commands::Report {
            scoring,
            json,
            include_median,
            output,
        } => {
            let (set, tables) = score_input(&scoring)?;
            let report = build_report(&set, &tables)?;

            emit_report(&report, json, include_median, output.as_deref())?;
        }
        Commands::Export {
            scoring,
            output,
            gzip,
        } => {
            let (set, _) = score_input(&scoring)?;
            let path = export_score_table(&output, &set, gzip)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Filter from `var`, falling back to `default` when unset or unparsable.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

/// Loads config and CSV, applies CLI overrides, and scores the responses.
#[tracing::instrument(skip(args), fields(input = %args.input.display()))]
fn score_input(args: &ScoringArgs) -> Result<(ScoreSet, RatingTables)> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::load(path)?,
        None => ScorerConfig::default(),
    };
    if let Some(policy) = args.on_invalid_row {
        config.on_invalid_row = policy.into();
    }
    if args.validate_range {
        config.validate_range = true;
    }
    if let Some(preset) = args.preset {
        config.preset = preset.into();
    }

    let records = load_responses(&args.input)?;
    let mut set = compute_scores_with(&records, &config.scoring_options())?;

    if let Some(user) = args.user {
        set = select_respondent(&set, user)?;
    }

    info!(
        respondents = set.len(),
        skipped = set.skipped().len(),
        "Scored responses"
    );

    Ok((set, config.rating_tables()))
}

fn emit_report(
    report: &ScoreReport,
    json: bool,
    include_median: bool,
    output: Option<&Path>,
) -> Result<()> {
    if json {
        match output {
            Some(path) => write_json(path, report)?,
            None => println!("{}", to_json(report)?),
        }
        return Ok(());
    }

    let text = render_text(
        report,
        ReportSections {
            summary: true,
            median_scores: include_median,
        },
    );
    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!(path = %path.display(), "Wrote text report");
        }
        None => print!("{text}"),
    }
    Ok(())
}
