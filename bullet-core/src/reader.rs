//! CSV reading for the schedule export.

use csv::ReaderBuilder;

use crate::error::BulletResult;

/// Lazily split a document into rows of cells.
///
/// Comma separated, `"` quoted. Every row is returned, including any header;
/// rows may have differing lengths.
pub fn read_rows(document: &str) -> impl Iterator<Item = BulletResult<Vec<String>>> + '_ {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .from_reader(document.as_bytes())
        .into_records()
        .map(|record| -> BulletResult<Vec<String>> {
            Ok(record?.iter().map(str::to_owned).collect())
        })
}
