use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod event;
mod export;
mod input;
mod pipeline;
mod render;
mod validate;

use config::{JSON_OUT_ENV, ReportConfig, UnparsedPolicy};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "trail-log")]
#[command(about = "Outdoor activity log parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an event log, print the enriched table and validation errors.
    Report {
        #[arg(long)]
        log: PathBuf,

        /// Also write the records as JSON lines.
        #[arg(short = 'o', long, env = JSON_OUT_ENV)]
        json_out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = UnparsedPolicy::Report)]
        on_unparsed: UnparsedPolicy,
    },
    /// Re-validate and print a previously exported JSON-lines file.
    Reload {
        #[arg(long)]
        jsonl: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            log,
            json_out,
            on_unparsed,
        } => {
            let run = run_report(&ReportConfig::new(log, json_out, on_unparsed))?;
            // The summary goes out even when the export failed.
            print!("{}", run.summary);
            run.export?;
        }
        Commands::Reload { jsonl } => print!("{}", run_reload(&jsonl)?),
    }

    Ok(())
}

/// Console summary of a parsed log and the result of the optional export.
struct ReportRun {
    summary: String,
    export: Result<()>,
}

/// Parse, validate, render, then optionally export.
fn run_report(cfg: &ReportConfig) -> Result<ReportRun> {
    info!(input = %cfg.input.display(), "reading event log");

    // 1) Read lines; a missing file stops here.
    let lines = input::read_lines(&cfg.input)?;

    // 2) Parse + enrich in file order.
    let patterns = event::Patterns::compile()?;
    let outcome = pipeline::run(&patterns, &lines, cfg.on_unparsed)?;

    // 3) Validate.
    let validation = validate::validate(&outcome.records, validate::DEFAULT_RULES);

    // 4) Render before exporting so a failed write cannot hide it.
    let summary = summarize(&outcome.records, &validation, &outcome.errors);

    // 5) Export; violations do not block it.
    let export = match &cfg.json_out {
        Some(path) => export::write_json_lines(path, &outcome.records),
        None => Ok(()),
    };

    Ok(ReportRun { summary, export })
}

fn run_reload(path: &std::path::Path) -> Result<String> {
    let records = export::read_json_lines(path)?;
    info!(path = %path.display(), records = records.len(), "reloaded records");
    let validation = validate::validate(&records, validate::DEFAULT_RULES);
    Ok(summarize(&records, &validation, &[]))
}

fn summarize(
    records: &[event::EventRecord],
    validation: &validate::ValidationReport,
    errors: &[error::RecordError],
) -> String {
    let mut out = render::render_table(records);
    let report = render::render_error_report(validation, errors);
    if !report.is_empty() {
        out.push('\n');
        out.push_str(&report);
    }
    out
}
