use anyhow::Context;
use scraper::Html;

use crate::schema::TitleRecord;

pub const CATALOG_HOST: &str = "https://www.goodreads.com";
pub const SEARCH_URL: &str = "https://www.goodreads.com/search?q=fantasy&qid=NwUsLiA2Nc";

/// How many result links a single harvest keeps.
pub const SEARCH_LINK_LIMIT: usize = 10;

/// Extracts one (title, author) record per book row of a search-results page.
pub fn parse_search_results(html: &Html) -> anyhow::Result<Vec<TitleRecord>> {
    html.select(selector!(r#"tr[itemtype="http://schema.org/Book"]"#))
        .map(|row| {
            let title = row
                .select(selector!(r#"a.bookTitle span[itemprop="name"]"#))
                .next()
                .context("Book title span not found")?
                .text()
                .collect::<String>()
                .trim()
                .to_owned();
            let author = row
                .select(selector!(r#"a.authorName span[itemprop="name"]"#))
                .next()
                .context("Author name span not found")?
                .text()
                .collect::<String>()
                .trim()
                .to_owned();
            Ok(TitleRecord::builder().title(title).author(author).build())
        })
        .collect()
}

/// Collects the first [`SEARCH_LINK_LIMIT`] book-detail links in document order,
/// each prefixed with [`CATALOG_HOST`].
///
/// An anchor without an href contributes the bare catalog host rather than
/// failing the harvest.
pub fn parse_search_links(html: &Html) -> Vec<String> {
    html.select(selector!("a.bookTitle"))
        .map(|anchor| {
            format!(
                "{}{}",
                CATALOG_HOST,
                anchor.value().attr("href").unwrap_or_default()
            )
        })
        .take(SEARCH_LINK_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{parse_search_links, parse_search_results, CATALOG_HOST};
    use crate::fs_util::read_html;

    const SEARCH_RESULTS: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/search_results.htm");

    #[test]
    fn twenty_records_in_document_order() {
        let html = read_html(SEARCH_RESULTS).unwrap();
        let records = parse_search_results(&html).unwrap();
        assert_eq!(records.len(), 20);
        for record in &records {
            assert!(!record.title().is_empty());
            assert!(!record.author().is_empty());
        }
        assert_eq!(
            records[0].title(),
            "Harry Potter and the Deathly Hallows (Harry Potter, #7)"
        );
        assert_eq!(records[0].author(), "J.K. Rowling");
        assert_eq!(
            records[19].title(),
            "Harry Potter: The Prequel (Harry Potter, #0.5)"
        );
        assert_eq!(records[19].author(), "J.K. Rowling");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let html = read_html(SEARCH_RESULTS).unwrap();
        assert_eq!(
            parse_search_results(&html).unwrap(),
            parse_search_results(&html).unwrap()
        );
    }

    #[test]
    fn links_are_absolute_and_capped_at_ten() {
        let html = read_html(SEARCH_RESULTS).unwrap();
        let links = parse_search_links(&html);
        assert_eq!(links.len(), 10);
        for link in &links {
            assert!(link.starts_with(CATALOG_HOST));
            assert!(link.contains("/book/show/"));
        }
    }

    #[test]
    fn missing_href_yields_placeholder() {
        let html = Html::parse_document(
            r#"<a class="bookTitle"><span itemprop="name">No Link</span></a>"#,
        );
        assert_eq!(parse_search_links(&html), vec![CATALOG_HOST.to_owned()]);
    }

    #[test]
    fn missing_author_is_an_error() {
        let html = Html::parse_document(
            r#"<table><tr itemtype="http://schema.org/Book">
                <td><a class="bookTitle"><span itemprop="name">Orphaned Title</span></a></td>
            </tr></table>"#,
        );
        assert!(parse_search_results(&html).is_err());
    }
}
