use std::path::PathBuf;

use fs_err::File;

use crate::schema::TitleRecord;

pub const CSV_HEADER: [&str; 2] = ["Book title", "Author Name"];

/// Serializes (title, author) pairs to a comma-delimited file.
///
/// The destination is truncated, the header written first, then one row per
/// record in input order.  Fields are quoted only when they contain the
/// delimiter, a quote, or a line break.  Everything is flushed before
/// returning; there is no atomic rename, so a crash mid-write leaves a
/// partial file.
pub fn write_csv<P: Into<PathBuf>>(records: &[TitleRecord], path: P) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(File::create(path.into())?);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([record.title(), record.author()])?;
    }
    writer.flush()?;
    Ok(())
}
