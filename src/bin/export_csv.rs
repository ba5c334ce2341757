use std::path::PathBuf;

use clap::Parser;
use goodreads_scraping::fs_util::read_html;
use goodreads_scraping::report::write_csv;
use goodreads_scraping::search::parse_search_results;
use log::info;

/// Extracts (title, author) pairs from a saved search-results snapshot and
/// writes them to a CSV file.
#[derive(Parser)]
struct Opts {
    input: PathBuf,
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let html = read_html(&opts.input)?;
    let records = parse_search_results(&html)?;
    info!(
        "Extracted {} records from {}",
        records.len(),
        opts.input.display()
    );
    write_csv(&records, &opts.output)?;
    println!(
        "Wrote {} lines to {}.",
        records.len() + 1,
        opts.output.display()
    );
    Ok(())
}
