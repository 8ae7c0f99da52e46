use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use medplan_core::{describe_frequency, AdvisoryCatalog, Interpreter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medplan")]
#[command(about = "Turn prescription text into a daily medication plan", long_about = None)]
struct Cli {
    /// JSON file overriding the built-in advisory catalog
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a plan from prescription text
    Plan {
        /// Prescription file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Day for the motivation message (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Explain a frequency code such as 1-0-1
    Explain { code: String },
    /// Print the motivation message for a day
    Motivation {
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Print the active advisory catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let interpreter = Interpreter::with_catalog(load_catalog(cli.catalog.as_deref())?);

    match cli.command {
        Commands::Plan { file, date, json } => {
            let text = read_prescription(file.as_deref())?;
            let date = date.unwrap_or_else(today);
            let plan = interpreter.plan(&text, date);
            info!(
                records = plan.records.len(),
                skipped = plan.skipped.len(),
                "plan ready"
            );

            if json {
                println!("{}", plan.to_json()?);
            } else {
                print!("{}", plan.to_text());
            }
        }
        Commands::Explain { code } => {
            println!("{}", describe_frequency(&code));
        }
        Commands::Motivation { date } => {
            println!("{}", interpreter.daily_motivation(date.unwrap_or_else(today)));
        }
        Commands::Catalog => {
            println!("{}", interpreter.catalog().to_json()?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<AdvisoryCatalog> {
    match path {
        Some(path) => {
            debug!("Loading catalog from {}", path.display());
            AdvisoryCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))
        }
        None => Ok(AdvisoryCatalog::default()),
    }
}

fn read_prescription(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prescription {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read prescription from stdin")?;
            Ok(text)
        }
    }
}

/// The only place the clock is read.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
