use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::aggregate::{BookSummary, ChapterRecord};
use crate::error::{Result, ScrapeError};
use crate::settings::OutputMode;

const CHAPTERS_CSV: &str = "chapters.csv";
const BOOKS_CSV: &str = "books.csv";
const CHAPTERS_TSV: &str = "chapters.tsv";

/// Write the report artifacts for a completed run into `out_dir` and
/// return the paths written. The chapter table is always produced; the
/// output mode picks the second artifact.
pub fn write_reports(
    out_dir: &Path,
    records: &[ChapterRecord],
    summaries: &[BookSummary],
    mode: OutputMode,
) -> Result<Vec<PathBuf>> {
    let chapters = out_dir.join(CHAPTERS_CSV);
    write_delimited(&chapters, b',', records)?;
    let mut written = vec![chapters];

    match mode {
        OutputMode::Summary => {
            let books = out_dir.join(BOOKS_CSV);
            write_delimited(&books, b',', summaries)?;
            written.push(books);
        }
        OutputMode::Tab => {
            let tsv = out_dir.join(CHAPTERS_TSV);
            write_delimited(&tsv, b'\t', records)?;
            written.push(tsv);
        }
    }

    Ok(written)
}

/// Serialize rows to a sibling temp file, then rename into place so a
/// failed write never leaves a half-written table behind.
fn write_delimited<S: Serialize>(path: &Path, delimiter: u8, rows: &[S]) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(&tmp)
        .map_err(|e| ScrapeError::report(&tmp, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| ScrapeError::report(&tmp, e))?;
    }
    writer.flush().map_err(|e| ScrapeError::io(&tmp, e))?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| ScrapeError::io(path, e))?;
    info!("Wrote {}", path.display());
    Ok(())
}
