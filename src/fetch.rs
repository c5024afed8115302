use tracing::info;

use crate::error::{Result, ScrapeError};

const BASE_URL: &str = "https://www.kingjamesbibleonline.org";
const USER_AGENT: &str = concat!("kjv_scraper/", env!("CARGO_PKG_VERSION"));

/// Where chapter documents come from. The pipeline only sees this trait;
/// tests substitute a canned source.
pub trait ChapterSource {
    fn fetch(&self, book: &str, chapter: u32) -> Result<String>;
}

/// Build the chapter URL. Spaces in the book name become hyphens
/// ("Song of Solomon" → "Song-of-Solomon"); the catalog keeps the
/// human-readable form.
pub fn chapter_url(book: &str, chapter: u32) -> String {
    format!("{}/{}-Chapter-{}/", BASE_URL, book.replace(' ', "-"), chapter)
}

/// Live HTTP source: one blocking GET per chapter, no retry, no backoff.
/// Any transport error or non-success status aborts the run.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HttpSource { client })
    }
}

impl ChapterSource for HttpSource {
    fn fetch(&self, book: &str, chapter: u32) -> Result<String> {
        let url = chapter_url(book, chapter);
        info!("Fetching {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fetch_err(book, chapter, e))?
            .error_for_status()
            .map_err(|e| fetch_err(book, chapter, e))?
            .text()
            .map_err(|e| fetch_err(book, chapter, e))?;

        Ok(body)
    }
}

fn fetch_err(book: &str, chapter: u32, source: reqwest::Error) -> ScrapeError {
    ScrapeError::Fetch {
        book: book.to_string(),
        chapter,
        message: source.to_string(),
    }
}
