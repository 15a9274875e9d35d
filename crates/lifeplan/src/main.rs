use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use lifeplan::report::depletion_line;
use lifeplan::{OutputFormat, init_logging, load_scenario, render};
use lifeplan_core::{YearMonth, simulate};

#[derive(Parser, Debug)]
#[command(name = "lifeplan")]
#[command(about = "Month-by-month household cash and investment projection")]
struct Args {
    /// Scenario file (YAML, or JSON with a .json extension)
    scenario: PathBuf,

    /// Origin month as YYYY-MM; overrides `current` in the scenario
    #[arg(long)]
    now: Option<YearMonth>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    let mut config = load_scenario(&args.scenario)?;
    if let Some(now) = args.now {
        config.current = Some(now);
    }

    let result = simulate(&config).wrap_err("simulation failed")?;
    tracing::info!(
        months = result.months.len(),
        depletion = ?result.depletion_year_month,
        "simulation finished"
    );

    print!("{}", render(&result, args.format)?);
    if args.format.is_table() {
        println!();
        println!("{}", depletion_line(&result));
    }

    Ok(())
}
