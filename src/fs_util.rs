use std::io::BufWriter;
use std::path::PathBuf;

use fs_err::File;
use scraper::Html;
use serde::Serialize;

/// Reads and parses a saved HTML snapshot.  The handle is scoped to this
/// call and released on every exit path.
pub fn read_html<P: Into<PathBuf>>(path: P) -> anyhow::Result<Html> {
    let text = fs_err::read_to_string(path.into())?;
    Ok(Html::parse_document(&text))
}

pub fn write_json<P: Into<PathBuf>, T: Serialize>(path: P, value: &T) -> anyhow::Result<()> {
    Ok(serde_json::to_writer(
        BufWriter::new(File::create(path.into())?),
        value,
    )?)
}
