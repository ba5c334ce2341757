use std::path::PathBuf;

use clap::Parser;
use goodreads_scraping::entities::extract_entities;
use goodreads_scraping::fs_util::read_html;

/// Prints the proper-noun-like phrases found in a saved book description.
#[derive(Parser)]
struct Opts {
    #[clap(default_value = "data/extra_credit.htm")]
    html_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let html = read_html(opts.html_file)?;
    for entity in extract_entities(&html)? {
        println!("{entity}");
    }
    Ok(())
}
