//! Cadence CLI
//!
//! Command-line interface to the cadence spaced repetition scheduler.
//! Assessments are read and written as JSON so a caller can chain reviews
//! through files.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cadence_core::{Assessment, Preview, Rating, Scheduler, SchedulerConfig};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Cadence - spaced repetition scheduling CLI
#[derive(Parser)]
#[command(name = "cadence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Schedule the next review of a learned item")]
#[command(long_about = "Cadence computes when a learned item should next be reviewed.\n\nGive it a rating of the latest recall attempt and, optionally, the previous assessment as JSON.")]
struct Cli {
    /// Scheduler configuration file (JSON: requestRetention, maximumInterval, w)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Target retention, overrides config file and CADENCE_REQUEST_RETENTION
    #[arg(long, global = true)]
    retention: Option<f64>,

    /// Maximum interval in days, overrides config file and CADENCE_MAXIMUM_INTERVAL
    #[arg(long, global = true)]
    max_interval: Option<u32>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a recall attempt and print the new assessment
    Assess {
        /// Rating: forgot, struggled, remembered, mastered (or 1-4)
        rating: Rating,
        /// When the attempt happened (RFC 3339 or YYYY-MM-DD, default now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
        /// Previous assessment JSON file (omit for a new item)
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Also write the new assessment to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Probability of recalling an assessed item
    Retrievability {
        /// Assessment JSON file
        assessment: PathBuf,
        /// When to evaluate (RFC 3339 or YYYY-MM-DD, default now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },

    /// Show the outcome of every rating without committing to one
    Preview {
        /// When the attempt happens (RFC 3339 or YYYY-MM-DD, default now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
        /// Previous assessment JSON file (omit for a new item)
        #[arg(long)]
        previous: Option<PathBuf>,
    },

    /// Chain assessments, each taken exactly when the previous one falls due
    Simulate {
        /// Ratings in order
        #[arg(required = true, num_args = 1..)]
        ratings: Vec<Rating>,
        /// Time of the first assessment (RFC 3339 or YYYY-MM-DD, default now)
        #[arg(long, value_parser = parse_timestamp)]
        start: Option<DateTime<Utc>>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let scheduler = build_scheduler(cli.config.as_deref(), cli.retention, cli.max_interval)?;
    let json = cli.json;

    match cli.command {
        Commands::Assess {
            rating,
            at,
            previous,
            output,
        } => run_assess(&scheduler, rating, at, previous, output, json),
        Commands::Retrievability { assessment, at } => run_retrievability(&assessment, at, json),
        Commands::Preview { at, previous } => run_preview(&scheduler, at, previous, json),
        Commands::Simulate { ratings, start } => run_simulate(&scheduler, &ratings, start, json),
    }
}

/// Layer configuration: file, then environment, then flags
fn build_scheduler(
    config_path: Option<&Path>,
    retention: Option<f64>,
    max_interval: Option<u32>,
) -> anyhow::Result<Scheduler> {
    let mut config = match config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            SchedulerConfig::from_json_str(&raw)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => SchedulerConfig::default(),
    }
    .apply_env_overrides();

    if let Some(r) = retention {
        config = config.with_request_retention(r);
    }
    if let Some(days) = max_interval {
        config = config.with_maximum_interval(days);
    }

    tracing::debug!(
        request_retention = config.request_retention,
        maximum_interval = config.maximum_interval,
        "Scheduler configured"
    );
    Ok(Scheduler::new(config)?)
}

/// Parse RFC 3339, or a bare date at midnight UTC
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("Invalid timestamp '{}'. Use RFC 3339 or YYYY-MM-DD.", s))
}

fn read_assessment(path: &Path) -> anyhow::Result<Assessment> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read assessment file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid assessment file {}", path.display()))
}

/// Run assess command
fn run_assess(
    scheduler: &Scheduler,
    rating: Rating,
    at: Option<DateTime<Utc>>,
    previous: Option<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let previous = previous.as_deref().map(read_assessment).transpose()?;
    let at = at.unwrap_or_else(Utc::now);
    let assessment = scheduler.assess_recall(rating, at, previous.as_ref());

    if let Some(path) = &output {
        let body = serde_json::to_string_pretty(&assessment)?;
        std::fs::write(path, body)
            .with_context(|| format!("Failed to write assessment to {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("{}", "=== Cadence Assessment ===".cyan().bold());
    println!();
    println!("{}: {}", "Rating".white().bold(), rating);
    println!(
        "{}: {}",
        "Previous State".white().bold(),
        previous.map(|p| p.state().to_string()).unwrap_or_else(|| "New".to_string())
    );
    print_assessment(&assessment);
    if let Some(path) = output {
        println!();
        println!("{} {}", "Saved to".dimmed(), path.display());
    }
    Ok(())
}

/// Run retrievability command
fn run_retrievability(path: &Path, at: Option<DateTime<Utc>>, json: bool) -> anyhow::Result<()> {
    let assessment = read_assessment(path)?;
    let at = at.unwrap_or_else(Utc::now);
    let r = assessment.retrievability_at(at);

    if json {
        let body = serde_json::json!({
            "at": at,
            "elapsedDays": assessment.elapsed_days(at),
            "retrievability": r,
            "due": assessment.is_due(at),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", "=== Cadence Retrievability ===".cyan().bold());
    println!();
    println!("{}: {}", "Evaluated At".white().bold(), at.to_rfc3339());
    println!("{}: {:.2}", "Elapsed Days".white().bold(), assessment.elapsed_days(at));
    println!("{}: {}", "Retrievability".white().bold(), colored_percent(r));
    println!(
        "{}: {}",
        "Due".white().bold(),
        if assessment.is_due(at) { "yes".yellow() } else { "no".green() }
    );
    Ok(())
}

/// Run preview command
fn run_preview(
    scheduler: &Scheduler,
    at: Option<DateTime<Utc>>,
    previous: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let previous = previous.as_deref().map(read_assessment).transpose()?;
    let at = at.unwrap_or_else(Utc::now);
    let preview: Preview = scheduler.preview(at, previous.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!("{}", "=== Cadence Preview ===".cyan().bold());
    println!();
    println!(
        "{:<12} {:<11} {:>10} {:>10} {:>14}",
        "Rating".bold(),
        "State".bold(),
        "Stability".bold(),
        "Difficulty".bold(),
        "Interval".bold()
    );
    for (rating, outcome) in preview.iter() {
        println!(
            "{:<12} {:<11} {:>10.4} {:>10.4} {:>14}",
            rating.to_string(),
            outcome.state().to_string(),
            outcome.stability(),
            outcome.difficulty(),
            format_interval(outcome)
        );
    }
    Ok(())
}

/// Run simulate command
fn run_simulate(
    scheduler: &Scheduler,
    ratings: &[Rating],
    start: Option<DateTime<Utc>>,
    json: bool,
) -> anyhow::Result<()> {
    let mut at = start.unwrap_or_else(Utc::now);
    let mut history: Vec<Assessment> = Vec::with_capacity(ratings.len());

    for &rating in ratings {
        let next = scheduler.assess_recall(rating, at, history.last());
        at = next.next_scheduled_assessment();
        history.push(next);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    println!("{}", "=== Cadence Simulation ===".cyan().bold());
    println!();
    for (step, (rating, assessment)) in ratings.iter().zip(&history).enumerate() {
        println!(
            "{:>3}. {:<11} {} -> {:<10} S={:<9.4} D={:<7.4} next in {}",
            step + 1,
            rating.to_string(),
            assessment.assessed_at().format("%Y-%m-%d %H:%M"),
            assessment.state().to_string(),
            assessment.stability(),
            assessment.difficulty(),
            format_interval(assessment)
        );
    }
    Ok(())
}

fn print_assessment(assessment: &Assessment) {
    println!("{}: {}", "New State".white().bold(), assessment.state());
    println!("{}: {:.4}", "Stability".white().bold(), assessment.stability());
    println!("{}: {:.4}", "Difficulty".white().bold(), assessment.difficulty());
    println!(
        "{}: {}",
        "Assessed At".white().bold(),
        assessment.assessed_at().to_rfc3339()
    );
    println!(
        "{}: {} ({})",
        "Next Review".white().bold(),
        assessment.next_scheduled_assessment().to_rfc3339(),
        format_interval(assessment)
    );
}

/// Human-readable gap until the next review
fn format_interval(assessment: &Assessment) -> String {
    let interval = assessment.scheduled_interval();
    let minutes = interval.num_minutes();
    if minutes < 60 {
        format!("{}m", minutes)
    } else if interval.num_hours() < 24 {
        format!("{}h", interval.num_hours())
    } else {
        format!("{:.1}d", interval.num_milliseconds() as f64 / 86_400_000.0)
    }
}

fn colored_percent(r: f64) -> String {
    let text = format!("{:.1}%", r * 100.0);
    if r >= 0.9 {
        text.green().to_string()
    } else if r >= 0.7 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
