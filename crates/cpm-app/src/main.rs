use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cpm_codec::decode_high_range;
use cpm_core::mapping::ConversionTable;
use cpm_core::page::CodePage;

pub mod cli;
pub mod report;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. No arguments: usage, successful exit
    if cli.pages.is_empty() {
        cli::Cli::command().print_help()?;
        return Ok(());
    }

    // 4. Resolve every identifier before decoding anything, so a bad
    //    argument fails the run before any output is produced
    let pages = cli
        .pages
        .iter()
        .map(|identifier| CodePage::from_identifier(identifier))
        .collect::<Result<Vec<_>, _>>()
        .context("resolving code page arguments")?;

    // 5. Fold each page's mappings into the table, in argument order
    let table = pages.iter().fold(ConversionTable::new(), |table, &page| {
        table.absorb(decode_high_range(page))
    });

    // 6. Emit both sections on stdout
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_test_report(&table, &mut out).context("writing test report")?;
    report::write_data_table(&table, &mut out).context("writing data table")?;
    out.flush()?;

    Ok(())
}
