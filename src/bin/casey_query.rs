//! One-shot Query Runner
//!
//! Runs a single query against the roster and prints the results panel as
//! text or JSON, without the processing pause.

use casey::core::config::CaseyConfig;
use casey::core::error::Result;
use casey::query::plan_query;
use casey::roster::{EmployeeRecord, Roster};
use casey::ui::display::render_results;
use casey::ui::results::{ResultsPanel, ResultsView, RiskBreakdown, RiskFilter, SortKey};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Casey Query Runner - answer one absence question and exit
#[derive(Parser, Debug)]
#[command(name = "casey_query")]
#[command(about = "Run one Casey query and print the results")]
struct Args {
    /// The question, e.g. "show absent employees my team"
    query: String,

    /// Roster file (TOML); defaults to the config's roster_path or the sample roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Config file (TOML); falls back to $CASEY_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Sort key: name, days, risk or department
    #[arg(long, default_value = "days")]
    sort: SortKey,

    /// Risk post-filter: all, high, medium or low
    #[arg(long, default_value = "all")]
    risk: RiskFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    steps: Vec<&'static str>,
    summary: &'a str,
    total: usize,
    shown: usize,
    breakdown: RiskBreakdown,
    employees: &'a [&'a EmployeeRecord],
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = CaseyConfig::resolve(args.config.as_deref())?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let roster_path = args.roster.or(cfg.roster_path);
    let roster = Roster::from_path_or_sample(roster_path.as_deref())?;

    let view = ResultsView {
        sort: args.sort,
        risk_filter: args.risk,
        selected: None,
    };
    let panel = ResultsPanel::build(&roster, &args.query, &view);

    match args.format {
        OutputFormat::Json => {
            let output = QueryOutput {
                query: &panel.query,
                steps: plan_query(&args.query).step_names(),
                summary: &panel.summary,
                total: panel.total,
                shown: panel.rows.len(),
                breakdown: panel.breakdown,
                employees: &panel.rows,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print!("{}", render_results(&panel)),
    }

    Ok(())
}
