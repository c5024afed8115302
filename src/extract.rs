use scraper::{Html, Selector};
use tracing::warn;

/// Text of every `<p>` element in source order. Chapter pages render one
/// verse per `<p>`; the final `<p>` is site navigation, not chapter text.
pub fn verse_blocks(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let p = Selector::parse("p").unwrap();
    doc.select(&p)
        .map(|el| el.text().collect::<String>())
        .collect()
}

/// Count the words of a chapter from its verse blocks.
///
/// The last block is dropped. Each remaining block contributes its
/// whitespace-token count minus one — the leading token is the verse
/// number, not content. Returns `None` when fewer than two blocks exist
/// (nothing is left once the trailer is dropped).
pub fn count_words(blocks: &[String]) -> Option<u32> {
    let (_, verses) = blocks.split_last()?;
    if verses.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    for (idx, verse) in verses.iter().enumerate() {
        let adjusted = verse.split_whitespace().count() as i64 - 1;
        if adjusted < 0 {
            warn!("verse block {} has no tokens, contributes {}", idx + 1, adjusted);
        }
        total += adjusted;
    }

    Some(total.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(token_counts: &[usize]) -> Vec<String> {
        token_counts
            .iter()
            .map(|&n| vec!["tok"; n].join(" "))
            .collect()
    }

    #[test]
    fn drops_trailer_and_subtracts_verse_markers() {
        // last block discarded, (6-1) + (9-1) = 13
        assert_eq!(count_words(&blocks(&[6, 9, 4])), Some(13));
    }

    #[test]
    fn zero_or_one_blocks_is_invalid() {
        assert_eq!(count_words(&blocks(&[])), None);
        assert_eq!(count_words(&blocks(&[5])), None);
    }

    #[test]
    fn empty_blocks_never_drive_the_total_negative() {
        assert_eq!(count_words(&blocks(&[0, 0, 3])), Some(0));
        assert_eq!(count_words(&blocks(&[0, 5, 3])), Some(3));
    }

    #[test]
    fn paragraph_text_includes_nested_elements() {
        let html = "<html><body>\
            <p><a href=\"/Genesis-1-1/\">1</a> In the beginning</p>\
            <p>2 And the earth</p>\
            <p>Next Chapter</p>\
            </body></html>";
        let blocks = verse_blocks(html);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "1 In the beginning");
    }

    #[test]
    fn no_paragraphs_yields_no_blocks() {
        assert!(verse_blocks("<html><body><div>text</div></body></html>").is_empty());
    }

    #[test]
    fn psalm_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/psalm_117.html").unwrap();
        let blocks = verse_blocks(&html);
        assert_eq!(blocks.len(), 3, "two verses plus the navigation trailer");
        assert_eq!(count_words(&blocks), Some(33));
    }
}
