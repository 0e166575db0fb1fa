//! Per-language edition configuration.

use nw_core::LanguageTarget;
use serde::{Deserialize, Serialize};

use crate::thresholds::ThresholdConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    pub code: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub section_id: Option<String>,

    /// Batch label used by `--batch` to split runs.
    #[serde(default)]
    pub batch: Option<String>,

    #[serde(default)]
    pub audio_min_kb: Option<u64>,

    #[serde(default)]
    pub transcript_min_chars: Option<usize>,
}

impl LanguageConfig {
    /// Whether this language is part of `batch` (case-insensitive).
    #[must_use]
    pub fn in_batch(&self, batch: &str) -> bool {
        self.batch
            .as_deref()
            .unwrap_or_default()
            .eq_ignore_ascii_case(batch)
    }

    /// Resolve display name, section and thresholds against the defaults.
    #[must_use]
    pub fn to_target(&self, default_section_id: &str, defaults: ThresholdConfig) -> LanguageTarget {
        LanguageTarget {
            code: self.code.clone(),
            display_name: self
                .display_name
                .clone()
                .unwrap_or_else(|| self.code.clone()),
            section_id: self
                .section_id
                .clone()
                .unwrap_or_else(|| default_section_id.to_string()),
            audio_min_kb: self.audio_min_kb.unwrap_or(defaults.audio_min_kb),
            transcript_min_chars: self
                .transcript_min_chars
                .unwrap_or(defaults.transcript_min_chars),
        }
    }
}
