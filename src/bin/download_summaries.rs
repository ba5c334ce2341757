use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use goodreads_scraping::api::{fetch_book_summary, fetch_search_links, reqwest_client};
use goodreads_scraping::fs_util::write_json;
use log::info;

/// Harvests the first ten book-detail links from the fixed search page,
/// downloads each book's summary, and saves them all as JSON.
#[derive(Parser)]
struct Opts {
    json_file: PathBuf,
    /// Request timeout in seconds.  Requests block indefinitely when omitted.
    #[clap(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let client = reqwest_client(opts.timeout.map(Duration::from_secs))?;

    let links = fetch_search_links(&client).await?;
    info!("Harvested {} result links", links.len());

    let mut summaries = Vec::with_capacity(links.len());
    for link in &links {
        let summary = fetch_book_summary(&client, link).await?;
        info!(
            "Downloaded {:?} by {:?} ({} pages)",
            summary.title(),
            summary.author(),
            summary.page_count()
        );
        summaries.push(summary);
    }

    write_json(&opts.json_file, &summaries)?;
    println!(
        "Successfully saved {} summaries to {}.",
        summaries.len(),
        opts.json_file.display()
    );
    Ok(())
}
