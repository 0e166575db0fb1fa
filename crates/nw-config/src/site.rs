//! Site addressing configuration.

use chrono::{Datelike, NaiveDate};
use nw_core::LanguageTarget;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://www.rti.org.tw")
}

fn default_section_id() -> String {
    String::from("4")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin of the broadcaster's site, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Section id used for languages that do not set their own.
    #[serde(default = "default_section_id")]
    pub default_section_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_section_id: default_section_id(),
        }
    }
}

impl SiteConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Address of one edition's schedule page for `date`.
    ///
    /// Format: `{base}/{code}/programschedule?uid={section}&date=YYYY/MM/DD`
    #[must_use]
    pub fn schedule_url(&self, target: &LanguageTarget, date: NaiveDate) -> String {
        format!(
            "{}/{}/programschedule?uid={}&date={:04}/{:02}/{:02}",
            self.base(),
            target.code,
            target.section_id,
            date.year(),
            date.month(),
            date.day()
        )
    }

    /// Address of a program page for a program id decoded from an audio file.
    ///
    /// Format: `{base}/{code}/program?uid={section}&pid={pid}`
    #[must_use]
    pub fn program_url(&self, target: &LanguageTarget, pid: &str) -> String {
        format!(
            "{}/{}/program?uid={}&pid={pid}",
            self.base(),
            target.code,
            target.section_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn french() -> LanguageTarget {
        LanguageTarget {
            code: "fr".into(),
            display_name: "Français".into(),
            section_id: "4".into(),
            audio_min_kb: 2000,
            transcript_min_chars: 40,
        }
    }

    #[test]
    fn schedule_url_uses_slashed_date() {
        let site = SiteConfig {
            base_url: "https://radio.example/".into(),
            ..SiteConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(
            site.schedule_url(&french(), date),
            "https://radio.example/fr/programschedule?uid=4&date=2025/09/01"
        );
    }

    #[test]
    fn program_url_embeds_pid() {
        let site = SiteConfig::default();
        assert_eq!(
            site.program_url(&french(), "111"),
            "https://www.rti.org.tw/fr/program?uid=4&pid=111"
        );
    }
}
