use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pajak_cli::{batch, commands::TaxCommand, logging, report};
use pajak_core::{CalculationReport, CalculationRequest, TaxpayerKind, calculate};
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indonesian tax calculator.
///
/// Runs one calculation from command-line flags, or a batch of them from a
/// TOML file, and prints the result as text or JSON.
#[derive(Debug, Parser)]
#[command(name = "pajak", version)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value = "text", env = "PAJAK_FORMAT", global = true)]
    format: OutputFormat,

    /// Log more detail to stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available tax types.
    List {
        /// Only list the tax types for this kind of taxpayer.
        #[arg(long)]
        kind: Option<TaxpayerKind>,
    },

    /// Run every `[[calculation]]` table of a TOML file.
    Batch {
        #[arg(long)]
        file: PathBuf,
    },

    #[command(flatten)]
    Calculate(TaxCommand),
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_report(
    format: OutputFormat,
    report: &CalculationReport,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report::render_text(report)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_batch(
    format: OutputFormat,
    entries: &[batch::BatchEntry],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                println!("#{} {}", entry.index, report::render_text(&entry.report));
            }
        }
        OutputFormat::Json => {
            let reports: Vec<&CalculationReport> = entries.iter().map(|e| &e.report).collect();
            let json =
                serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
            println!("{json}");
        }
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Command::List { kind } => print!("{}", report::render_tax_type_list(kind)),
        Command::Batch { file } => {
            let entries = batch::run_batch_file(&file)?;
            print_batch(cli.format, &entries)?;
        }
        Command::Calculate(command) => {
            let request = CalculationRequest::from(command);
            debug!(tax_type = request.tax_type().as_str(), "running calculation");
            let report = calculate(&request).context("calculation failed")?;
            print_report(cli.format, &report)?;
        }
    }

    Ok(())
}
