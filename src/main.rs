//! addrplot - plot address-tracking counters from CSV on stdin
//!
//! Reads `executed,addr_mem,addr_any` rows, prints a preview of the table and
//! shows both counters against instructions executed in a chart window.

mod charts;
mod config;
mod data;
mod gui;
mod logger;

use anyhow::Context;
use clap::Parser;
use config::Cli;
use data::DataLoader;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    let config = Cli::parse().into_config();

    let mut loader = DataLoader::new();
    loader
        .load_reader(std::io::stdin().lock())
        .context("reading CSV from stdin")?;
    println!("{}", loader.preview()?);

    let table = loader
        .observations()
        .context("extracting observation columns")?;
    info!(rows = table.len(), executed_range = ?table.executed_range(), "loaded observations");
    if table.is_empty() {
        debug!("no data rows, plotting empty series");
    } else if !table.is_executed_monotonic() {
        debug!("executed column is not monotonic, plotting rows as given");
    }

    let spec = charts::render(&table, &config);
    gui::show(spec).context("displaying chart")?;

    Ok(())
}
