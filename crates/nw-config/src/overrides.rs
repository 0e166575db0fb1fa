//! Program-level overrides used during resolution.

use serde::{Deserialize, Serialize};

fn default_title_hints() -> Vec<String> {
    [
        "English Program",
        "Beyond the Reefs",
        "The Doomscroll News Report",
        "News",
        "ON AIR",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OverridesConfig {
    /// Program titles that are not expected to publish a transcript page.
    #[serde(default)]
    pub transcript_exempt_programs: Vec<String>,

    /// Known program-name fragments, checked in order, used to title audio
    /// files found on schedule pages.
    #[serde(default = "default_title_hints")]
    pub title_hints: Vec<String>,
}

impl Default for OverridesConfig {
    fn default() -> Self {
        Self {
            transcript_exempt_programs: Vec::new(),
            title_hints: default_title_hints(),
        }
    }
}
