use std::path::PathBuf;

/// Top-level error type for the scrape pipeline.
///
/// Every variant aborts the run: the pipeline has no partial-success mode,
/// so a single bad catalog line or failed chapter discards everything.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Malformed catalog line.
    #[error("catalog line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Transport failure or non-success response for one chapter.
    #[error("fetch failed for {book} chapter {chapter}: {message}")]
    Fetch {
        book: String,
        chapter: u32,
        message: String,
    },

    /// Chapter document had no countable verse blocks.
    #[error("no usable content in {book} chapter {chapter}: {message}")]
    Extraction {
        book: String,
        chapter: u32,
        message: String,
    },

    /// Result sequences do not line up with the catalog's chapter total.
    #[error("pipeline integrity: expected {expected} chapter results, got {got}")]
    Integrity { expected: usize, got: usize },

    /// Filesystem I/O failure.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failure.
    #[error("report error at {path:?}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    /// Create a parse error for a 1-based catalog line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Wrap a `std::io::Error` with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `csv::Error` with the report path it occurred at.
    pub fn report(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }
}
