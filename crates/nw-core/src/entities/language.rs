use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One broadcast language edition, with thresholds already resolved from
/// global defaults and per-language overrides.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LanguageTarget {
    /// Path segment of the edition on the site (e.g. `en`, `fr`).
    pub code: String,
    pub display_name: String,
    /// Site section id passed as `uid` in schedule and program addresses.
    pub section_id: String,
    pub audio_min_kb: u64,
    pub transcript_min_chars: usize,
}
