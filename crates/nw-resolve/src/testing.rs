//! In-memory fetcher for offline resolution tests.

use std::collections::HashMap;

use chrono::NaiveDate;
use nw_core::LanguageTarget;
use nw_fetch::{FetchError, PageFetcher};

/// Pages and sizes keyed by address. Unknown pages fail with
/// [`FetchError::NotFound`]; unknown sizes probe as 0.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
    sizes: HashMap<String, u64>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, markup: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), markup.into());
        self
    }

    pub fn size_kb(mut self, url: &str, kb: u64) -> Self {
        self.sizes.insert(url.to_string(), kb * 1024);
        self
    }
}

impl PageFetcher for MemoryFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }

    async fn fetch_size(&self, url: &str) -> u64 {
        self.sizes.get(url).copied().unwrap_or(0)
    }
}

pub fn target(code: &str, display_name: &str) -> LanguageTarget {
    LanguageTarget {
        code: code.to_string(),
        display_name: display_name.to_string(),
        section_id: String::from("4"),
        audio_min_kb: 2000,
        transcript_min_chars: 40,
    }
}

pub fn sep_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Episode page with one audio file and `text_len` characters of text.
pub fn episode_page(audio_href: &str, text_len: usize) -> String {
    format!(
        r#"<html><body><audio src="{audio_href}"></audio><p>{}</p></body></html>"#,
        "x".repeat(text_len)
    )
}
