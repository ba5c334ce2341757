use anyhow::Context;
use itertools::Itertools;
use scraper::Html;

/// Pulls proper-noun-like phrases out of a book description.
///
/// The text of every span inside the description container is concatenated,
/// then scanned for non-overlapping matches of a capitalized bigram (first
/// word three or more letters, second word two or more).  Matches come back
/// in document order, duplicates included.  This is a heuristic, not a
/// linguistic parser.
pub fn extract_entities(html: &Html) -> anyhow::Result<Vec<String>> {
    let description = html
        .select(selector!("div#description"))
        .next()
        .context("Description container not found")?;
    let text: String = description
        .select(selector!("span"))
        .flat_map(|span| span.text())
        .collect();
    Ok(regex!(r"[A-Z][a-z][a-z]+\s+[A-Z][a-z]+")
        .find_iter(&text)
        .map(|found| found.as_str().to_owned())
        .collect_vec())
}
