use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ucoa_export::builder::build_ledger;
use ucoa_export::display::format_ledger_preview;
use ucoa_export::export::write_ledger_csv;
use ucoa_export::import::{read_parents, read_subs};

#[derive(Parser)]
#[command(
    name = "ucoa-export",
    version,
    about = "Convert a UCOA chart-of-accounts definition into a GnuCash account import CSV",
    long_about = "ucoa-export reads a two-level chart-of-accounts definition \
                  (parent categories and sub-accounts, keyed by numeric \
                  prefix/suffix codes) and flattens it into the 12-column \
                  account table that GnuCash's account importer expects."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ledger and write the import CSV
    Export {
        /// Parent categories CSV (columns: Prefix, Category)
        #[arg(short, long)]
        parents: PathBuf,
        /// Sub-accounts CSV (columns: Prefix, Suffix, Name)
        #[arg(short, long)]
        subs: PathBuf,
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Build the ledger and print it as a table without writing a file
    Preview {
        /// Parent categories CSV (columns: Prefix, Category)
        #[arg(short, long)]
        parents: PathBuf,
        /// Sub-accounts CSV (columns: Prefix, Suffix, Name)
        #[arg(short, long)]
        subs: PathBuf,
        /// Maximum rows to display (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// Validate the two input files and report row counts
    Check {
        /// Parent categories CSV (columns: Prefix, Category)
        #[arg(short, long)]
        parents: PathBuf,
        /// Sub-accounts CSV (columns: Prefix, Suffix, Name)
        #[arg(short, long)]
        subs: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            parents,
            subs,
            output,
        } => handle_export(parents, subs, output),
        Commands::Preview {
            parents,
            subs,
            limit,
        } => handle_preview(parents, subs, limit),
        Commands::Check { parents, subs } => handle_check(parents, subs),
    }
}

fn handle_export(parents: PathBuf, subs: PathBuf, output: PathBuf) -> Result<()> {
    // Build everything in memory first so a bad input never leaves a
    // partial output file behind.
    let parent_rows = read_parents(&parents)?;
    let sub_rows = read_subs(&subs)?;
    let ledger = build_ledger(&parent_rows, &sub_rows);

    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    write_ledger_csv(&ledger, &mut writer)?;

    println!(
        "Wrote {} accounts ({} parents, {} sub-accounts) to {}",
        ledger.len(),
        parent_rows.len(),
        sub_rows.len(),
        output.display()
    );
    Ok(())
}

fn handle_preview(parents: PathBuf, subs: PathBuf, limit: usize) -> Result<()> {
    let parent_rows = read_parents(&parents)?;
    let sub_rows = read_subs(&subs)?;
    let ledger = build_ledger(&parent_rows, &sub_rows);

    let shown = if limit > 0 && limit < ledger.len() {
        &ledger[..limit]
    } else {
        &ledger[..]
    };

    print!("{}", format_ledger_preview(shown));
    if shown.len() < ledger.len() {
        println!("... {} of {} accounts shown", shown.len(), ledger.len());
    } else {
        println!("{} accounts", ledger.len());
    }
    Ok(())
}

fn handle_check(parents: PathBuf, subs: PathBuf) -> Result<()> {
    let parent_rows = read_parents(&parents)?;
    let sub_rows = read_subs(&subs)?;
    let ledger = build_ledger(&parent_rows, &sub_rows);

    let placeholders = ledger.iter().filter(|r| r.placeholder).count();
    println!("parents:      {} rows", parent_rows.len());
    println!("subs:         {} rows", sub_rows.len());
    println!("ledger:       {} accounts", ledger.len());
    println!("placeholders: {}", placeholders);
    println!("postable:     {}", ledger.len() - placeholders);
    Ok(())
}
