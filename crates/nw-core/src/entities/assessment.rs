use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Audio and transcript health of one episode page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EpisodeAssessment {
    pub audio_ok: bool,
    pub transcript_ok: bool,
    /// Audio addresses in first-seen order, without duplicates.
    pub audio_urls: Vec<String>,
    /// Sizes in KB, index-aligned with `audio_urls`.
    pub audio_sizes_kb: Vec<u64>,
    pub transcript_len: usize,
    pub issues: Vec<String>,
}

impl EpisodeAssessment {
    /// Assessment for an episode page that could not be retrieved.
    #[must_use]
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            issues: vec![reason.into()],
            ..Self::default()
        }
    }
}
