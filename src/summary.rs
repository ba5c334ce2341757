use anyhow::Context;
use scraper::Html;

use crate::schema::BookSummary;

/// Extracts title, author, and page count from a book-detail page.
///
/// The page count element reads like "288 pages"; only the first
/// whitespace-delimited token is parsed, and a non-numeric token is an error.
pub fn parse_book_summary(html: &Html) -> anyhow::Result<BookSummary> {
    let title = html
        .select(selector!("h1#bookTitle"))
        .next()
        .context("Book title h1 not found")?
        .text()
        .collect::<String>()
        .trim()
        .to_owned();
    let author = html
        .select(selector!(r#"a.authorName span[itemprop="name"]"#))
        .next()
        .context("Author name span not found")?
        .text()
        .collect::<String>()
        .trim()
        .to_owned();
    let pages_text = html
        .select(selector!(r#"span[itemprop="numberOfPages"]"#))
        .next()
        .context("Page count span not found")?
        .text()
        .collect::<String>();
    let page_count = pages_text
        .split_whitespace()
        .next()
        .with_context(|| format!("Page count field is blank: {pages_text:?}"))?
        .parse()
        .with_context(|| format!("Page count does not start with an integer: {pages_text:?}"))?;
    Ok(BookSummary::builder()
        .title(title)
        .author(author)
        .page_count(page_count)
        .build())
}
