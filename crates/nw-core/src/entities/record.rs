use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Status;

/// One report row: a single program, episode or audio item resolved for one
/// language on one date.
///
/// The optional check fields are `None` where no check ran: `NO-DATA` rows
/// carry none of them, and rows backed only by a raw audio file carry no
/// transcript length.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolutionRecord {
    /// Local wall-clock time the row was produced (`%Y-%m-%d %H:%M:%S`).
    pub timestamp: String,
    pub date: NaiveDate,
    pub lang_code: String,
    pub lang: String,
    pub program_title: String,
    pub program_url: String,
    pub episode_title: String,
    pub episode_url: String,
    pub audio_ok: Option<bool>,
    pub audio_urls: Vec<String>,
    pub audio_sizes_kb: Vec<u64>,
    pub transcript_len: Option<usize>,
    pub transcript_ok: Option<bool>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl ResolutionRecord {
    /// Issues joined the way they appear in the tabular report.
    #[must_use]
    pub fn issue_text(&self) -> String {
        self.issues.join("; ")
    }
}
