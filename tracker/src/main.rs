//! Tracker command-line entry point
//!
//! Acts as the view layer: parses input, asks for confirmation before
//! destructive commands, renders the table and summary.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use shared::{SharedError, logging};
use tracker::view::{self, AssumeYes, DEMO_RECORDS, StdinConfirm};
use tracker::{Confirm, FileKeyValueStore, TrackerSession, config_source_for};

#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(about = "Record order/complaint counts and classify the complaint rate")]
struct Args {
    /// Configuration document: file path or http(s) URL
    #[arg(long, env = "TRACKER_CONFIG", default_value = "tracker.json")]
    config: String,

    /// Directory holding the stored records
    #[arg(long, env = "TRACKER_STORAGE_DIR", default_value = "./.tracker")]
    storage_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable coloured status output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a record
    Add {
        #[arg(long)]
        label: String,
        /// Total orders, a whole number > 0
        #[arg(long, allow_hyphen_values = true)]
        orders: String,
        /// Total complaints, a whole number >= 0
        #[arg(long, allow_hyphen_values = true)]
        complaints: String,
    },
    /// Show all records
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show totals and the global status
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Remove the record at a 1-based position
    Remove {
        position: usize,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove all records
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
    /// Add two example records
    SeedDemo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let source = config_source_for(&args.config);
    let storage = FileKeyValueStore::with_base_dir(&args.storage_dir);
    let mut session = TrackerSession::start(&*source, storage).await;
    let color = !args.no_color;

    let outcome = run(&mut session, args.command, color);
    if let Err(e) = &outcome {
        if !view::is_input_error(e) {
            logging::log_error(session.id(), "command", e);
        }
    }
    if let Some(err) = session.take_write_error() {
        eprintln!("Warning: changes were not saved: {err}");
    }
    session.close("command finished");
    outcome
}

fn run(session: &mut TrackerSession<FileKeyValueStore>, command: Command, color: bool) -> anyhow::Result<()> {
    match command {
        Command::Add {
            label,
            orders,
            complaints,
        } => {
            let (Some(order_count), Some(complaint_count)) =
                (view::parse_metric(&orders), view::parse_metric(&complaints))
            else {
                return Err(SharedError::invalid_metrics(orders.trim(), complaints.trim()).into());
            };

            let record = session.create_record(&label, order_count, complaint_count)?;
            println!(
                "Saved: {} | orders {} | complaints {} | {} -> {}",
                record.label(),
                record.order_count(),
                record.complaint_count(),
                view::format_percentage(record.percentage()),
                record.status()
            );
        }
        Command::List { json } => {
            if json {
                let payload = serde_json::to_string_pretty(session.records()).context("encoding records")?;
                println!("{payload}");
            } else {
                print!("{}", view::render_table(session.records(), color));
            }
        }
        Command::Summary { json } => {
            let summary = session.summarize();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary).context("encoding summary")?);
            } else {
                print!("{}", view::render_summary(&summary, color));
            }
        }
        Command::Remove { position, yes } => {
            let count = session.records().len();
            if position == 0 || position > count {
                bail!("No record at position {position} (there are {count})");
            }

            let index = position - 1;
            let label = session.records()[index].label().to_string();
            let prompt = format!("Remove record {position} '{label}'?");
            if !confirmer(yes).confirm(&prompt) {
                println!("Cancelled.");
                return Ok(());
            }

            if let Some(removed) = session.remove_at(index) {
                println!("Removed '{}'.", removed.label());
            }
        }
        Command::Clear { yes } => {
            if session.records().is_empty() {
                println!("Nothing to clear.");
                return Ok(());
            }

            let prompt = format!("Remove ALL {} records?", session.records().len());
            if !confirmer(yes).confirm(&prompt) {
                println!("Cancelled.");
                return Ok(());
            }

            session.clear();
            println!("All records removed.");
        }
        Command::SeedDemo => {
            for (label, orders, complaints) in DEMO_RECORDS {
                session.create_record(label, orders as f64, complaints as f64)?;
            }
            println!("Added {} example records.", DEMO_RECORDS.len());
            print!("{}", view::render_table(session.records(), color));
        }
    }

    Ok(())
}

fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}
