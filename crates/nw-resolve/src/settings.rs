//! Resolution settings derived from configuration.

use std::collections::HashSet;

use nw_config::{MonitorConfig, SiteConfig};

/// Everything the resolver reads from configuration, passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct ResolverSettings {
    pub site: SiteConfig,
    /// Program-name fragments used to title audio files found on schedules.
    pub title_hints: Vec<String>,
    transcript_exempt: HashSet<String>,
}

impl ResolverSettings {
    #[must_use]
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(
            config.site.clone(),
            config.overrides.title_hints.clone(),
            &config.overrides.transcript_exempt_programs,
        )
    }

    #[must_use]
    pub fn new(site: SiteConfig, title_hints: Vec<String>, transcript_exempt: &[String]) -> Self {
        Self {
            site,
            title_hints,
            transcript_exempt: transcript_exempt
                .iter()
                .map(|title| normalize_title(title))
                .collect(),
        }
    }

    /// Whether a program title is on the transcript exemption list.
    ///
    /// Matching ignores case and runs of whitespace.
    #[must_use]
    pub fn is_transcript_exempt(&self, title: &str) -> bool {
        self.transcript_exempt.contains(&normalize_title(title))
    }
}

fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
