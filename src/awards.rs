use anyhow::Context;
use scraper::Html;

use crate::schema::AwardEntry;

/// Extracts one entry per award-category block of a Choice Awards page.
///
/// Missing structural elements (the label, the winner image, the anchor) fail
/// with context.  Missing *attributes* on those elements do not: an image
/// without alt text or an anchor without an href yields `None`, which is kept
/// as-is in the entry.
pub fn parse_best_books(html: &Html) -> anyhow::Result<Vec<AwardEntry>> {
    html.select(selector!("div.category.clearFix"))
        .map(|block| {
            let category = block
                .select(selector!(".category__copy"))
                .next()
                .context("Category label not found")?
                .text()
                .collect::<String>()
                .trim()
                .to_owned();
            let winning_title = block
                .select(selector!("img.category__winnerImage"))
                .next()
                .context("Winner image not found")?
                .value()
                .attr("alt")
                .map(str::to_owned);
            let link = block
                .select(selector!("a"))
                .next()
                .context("Category anchor not found")?
                .value()
                .attr("href")
                .map(str::to_owned);
            Ok(AwardEntry::builder()
                .category(category)
                .winning_title(winning_title)
                .link(link)
                .build())
        })
        .collect()
}
