use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::catalog::Book;
use crate::error::{Result, ScrapeError};
use crate::estimate;
use crate::extract;
use crate::fetch::ChapterSource;

/// Per-chapter results, positionally aligned with the flattened
/// `(book, chapter)` expansion of the catalog.
#[derive(Debug)]
pub struct PipelineOutput {
    pub word_counts: Vec<u32>,
    pub reading_minutes: Vec<u32>,
}

/// Walk the catalog in order, one chapter at a time: fetch, extract,
/// estimate. Exactly one fetch is in flight at any moment; any failure
/// aborts the run with the offending book and chapter named.
pub fn run(
    source: &dyn ChapterSource,
    catalog: &[Book],
    words_per_minute: u32,
) -> Result<PipelineOutput> {
    let total: u64 = catalog.iter().map(|b| u64::from(b.chapters)).sum();

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
            .unwrap()
            .progress_chars("=> "),
    );

    let mut word_counts = Vec::with_capacity(total as usize);
    let mut reading_minutes = Vec::with_capacity(total as usize);

    for book in catalog {
        for chapter in 1..=book.chapters {
            let html = source.fetch(&book.name, chapter)?;
            let blocks = extract::verse_blocks(&html);
            let words = extract::count_words(&blocks).ok_or_else(|| ScrapeError::Extraction {
                book: book.name.clone(),
                chapter,
                message: format!(
                    "{} paragraph blocks, nothing countable after dropping the trailer",
                    blocks.len()
                ),
            })?;

            word_counts.push(words);
            reading_minutes.push(estimate::reading_minutes(words, words_per_minute));
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    info!("Processed {} chapters across {} books", total, catalog.len());

    Ok(PipelineOutput {
        word_counts,
        reading_minutes,
    })
}
