// src/export.rs

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::model::StateRecord;

pub const EXPORT_FILE_NAME: &str = "export.csv";
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";

/// Serialize records to CSV text. The header row uses the API's field names;
/// fields are quoted only when they contain a delimiter, quote or newline.
pub fn to_csv(records: &[StateRecord]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    for rec in records {
        wtr.serialize(rec)
            .with_context(|| format!("serializing record for {}", rec.state))?;
    }
    let bytes = wtr.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

/// Parse CSV produced by [`to_csv`]. An empty `Abbreviation` reads as absent.
pub fn from_csv(text: &str) -> Result<Vec<StateRecord>> {
    let mut rdr = ReaderBuilder::new().from_reader(text.as_bytes());
    rdr.deserialize::<StateRecord>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("parsing CSV row {}", i + 1)))
        .collect()
}

/// Write `records` to `dir/export.csv`.
///
/// The CSV is written to a temp file in `dir` first and renamed into place,
/// so a failed export never leaves a partial `export.csv` behind.
#[instrument(level = "info", skip(records, dir), fields(dir = %dir.display(), rows = records.len()))]
pub fn export_csv(records: &[StateRecord], dir: &Path) -> Result<PathBuf> {
    let csv = to_csv(records)?;
    debug!(bytes = csv.len(), mime = EXPORT_MIME, "serialized dataset");

    let dest = dir.join(EXPORT_FILE_NAME);
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(csv.as_bytes())
        .context("writing CSV to temp file")?;
    tmp.persist(&dest)
        .with_context(|| format!("moving export into {}", dest.display()))?;

    info!(path = %dest.display(), "export written");
    Ok(dest)
}
