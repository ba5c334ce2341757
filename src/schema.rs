use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A (title, author) pair as it appears in a search-results listing.
/// Both fields are trimmed and non-empty when produced by the parsers.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
pub struct TitleRecord {
    #[getset(get = "pub")]
    title: String,
    #[getset(get = "pub")]
    author: String,
}

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, CopyGetters, Getters, Serialize, Deserialize)]
pub struct BookSummary {
    #[getset(get = "pub")]
    title: String,
    #[getset(get = "pub")]
    author: String,
    #[getset(get_copy = "pub")]
    page_count: u32,
}

/// One Choice Awards category block.
///
/// `winning_title` and `link` come from attribute lookups that may be absent
/// in the source markup; an absent attribute yields `None` rather than an
/// error, and the `None` is kept in downstream output.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
pub struct AwardEntry {
    #[getset(get = "pub")]
    category: String,
    #[getset(get = "pub")]
    winning_title: Option<String>,
    #[getset(get = "pub")]
    link: Option<String>,
}
