use itertools::Itertools;
use serde::Serialize;

use crate::catalog::Book;
use crate::error::{Result, ScrapeError};
use crate::pipeline::PipelineOutput;

/// One row of the chapter table. Records are created once, in catalog
/// order, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    pub book: String,
    pub chapter: u32,
    pub word_count: u32,
    pub reading_minutes: u32,
}

/// Per-book totals, in catalog first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub book: String,
    pub total_words: u64,
    pub total_minutes: u64,
}

/// Zip the flattened `(book, 1..=chapters)` expansion of the catalog with
/// the pipeline's result sequences. A length mismatch means an upstream
/// pipeline bug, not a recoverable condition.
pub fn build_records(catalog: &[Book], output: &PipelineOutput) -> Result<Vec<ChapterRecord>> {
    let expected: usize = catalog.iter().map(|b| b.chapters as usize).sum();
    for got in [output.word_counts.len(), output.reading_minutes.len()] {
        if got != expected {
            return Err(ScrapeError::Integrity { expected, got });
        }
    }

    let flattened = catalog
        .iter()
        .flat_map(|b| (1..=b.chapters).map(move |chapter| (&b.name, chapter)));

    let records = flattened
        .zip(output.word_counts.iter().zip(output.reading_minutes.iter()))
        .map(|((book, chapter), (&word_count, &reading_minutes))| ChapterRecord {
            book: book.clone(),
            chapter,
            word_count,
            reading_minutes,
        })
        .collect();

    Ok(records)
}

/// Sum word counts and minutes per book. Records arrive in catalog order,
/// so grouping consecutive rows preserves first-appearance order.
pub fn summarize(records: &[ChapterRecord]) -> Vec<BookSummary> {
    let groups = records.iter().group_by(|r| r.book.as_str());

    let mut summaries = Vec::new();
    for (book, chapters) in &groups {
        let mut total_words = 0u64;
        let mut total_minutes = 0u64;
        for r in chapters {
            total_words += u64::from(r.word_count);
            total_minutes += u64::from(r.reading_minutes);
        }
        summaries.push(BookSummary {
            book: book.to_string(),
            total_words,
            total_minutes,
        });
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Book> {
        vec![
            Book { name: "Zephaniah".into(), chapters: 3 },
            Book { name: "Amos".into(), chapters: 2 },
        ]
    }

    #[test]
    fn records_line_up_with_the_flattened_catalog() {
        let output = PipelineOutput {
            word_counts: vec![10, 20, 30, 40, 50],
            reading_minutes: vec![1, 2, 3, 4, 5],
        };
        let records = build_records(&catalog(), &output).unwrap();

        assert_eq!(records.len(), 5);
        let keys: Vec<(&str, u32)> = records
            .iter()
            .map(|r| (r.book.as_str(), r.chapter))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Zephaniah", 1),
                ("Zephaniah", 2),
                ("Zephaniah", 3),
                ("Amos", 1),
                ("Amos", 2),
            ]
        );
        assert_eq!(records[3].word_count, 40);
        assert_eq!(records[3].reading_minutes, 4);
    }

    #[test]
    fn length_mismatch_is_an_integrity_error() {
        let output = PipelineOutput {
            word_counts: vec![10, 20],
            reading_minutes: vec![1, 2],
        };
        let err = build_records(&catalog(), &output).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::Integrity { expected: 5, got: 2 }
        ));
    }

    #[test]
    fn summaries_sum_per_book_and_keep_catalog_order() {
        let output = PipelineOutput {
            word_counts: vec![10, 20, 30, 40, 50],
            reading_minutes: vec![1, 2, 3, 4, 5],
        };
        let records = build_records(&catalog(), &output).unwrap();
        let summaries = summarize(&records);

        // Zephaniah before Amos: catalog order, not alphabetical
        assert_eq!(
            summaries,
            vec![
                BookSummary {
                    book: "Zephaniah".into(),
                    total_words: 60,
                    total_minutes: 6,
                },
                BookSummary {
                    book: "Amos".into(),
                    total_words: 90,
                    total_minutes: 9,
                },
            ]
        );
    }

    #[test]
    fn summary_totals_match_record_sums() {
        let output = PipelineOutput {
            word_counts: vec![7, 11, 13, 17, 19],
            reading_minutes: vec![1, 0, 1, 0, 1],
        };
        let records = build_records(&catalog(), &output).unwrap();
        for summary in summarize(&records) {
            let words: u64 = records
                .iter()
                .filter(|r| r.book == summary.book)
                .map(|r| u64::from(r.word_count))
                .sum();
            assert_eq!(summary.total_words, words);
        }
    }
}
