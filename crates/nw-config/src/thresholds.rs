//! Global pass/fail thresholds.

use serde::{Deserialize, Serialize};

const fn default_audio_min_kb() -> u64 {
    2000
}

const fn default_transcript_min_chars() -> usize {
    40
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Minimum size in KB of at least one audio asset.
    #[serde(default = "default_audio_min_kb")]
    pub audio_min_kb: u64,

    /// Minimum character count of the episode page text.
    #[serde(default = "default_transcript_min_chars")]
    pub transcript_min_chars: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            audio_min_kb: default_audio_min_kb(),
            transcript_min_chars: default_transcript_min_chars(),
        }
    }
}
