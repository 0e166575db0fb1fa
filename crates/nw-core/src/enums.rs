//! Status and link-kind enums for Newswatch.
//!
//! `Status` serializes with the report vocabulary (`OK`, `ISSUE`,
//! `SCHEDULED-NO-EPISODE`, `NO-DATA`); `LinkKind` uses `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Health of one resolved item for one language and date.
///
/// Assigned exactly once per record. `Ok` and `Issue` are derived from the
/// audio and transcript checks; the other two mark resolution outcomes that
/// never reached an episode assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ISSUE")]
    Issue,
    #[serde(rename = "SCHEDULED-NO-EPISODE")]
    ScheduledNoEpisode,
    #[serde(rename = "NO-DATA")]
    NoData,
}

impl Status {
    /// Derive the status of an assessed item: `Ok` iff both checks pass.
    #[must_use]
    pub const fn from_checks(audio_ok: bool, transcript_ok: bool) -> Self {
        if audio_ok && transcript_ok {
            Self::Ok
        } else {
            Self::Issue
        }
    }

    /// Return the label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Issue => "ISSUE",
            Self::ScheduledNoEpisode => "SCHEDULED-NO-EPISODE",
            Self::NoData => "NO-DATA",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LinkKind
// ---------------------------------------------------------------------------

/// What a schedule or program page anchor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// A program landing page listing past episodes.
    Program,
    /// A single aired episode page.
    Episode,
}

impl LinkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_is_ok_only_when_both_checks_pass() {
        assert_eq!(Status::from_checks(true, true), Status::Ok);
        assert_eq!(Status::from_checks(true, false), Status::Issue);
        assert_eq!(Status::from_checks(false, true), Status::Issue);
        assert_eq!(Status::from_checks(false, false), Status::Issue);
    }

    #[test]
    fn status_serializes_with_report_labels() {
        for status in [
            Status::Ok,
            Status::Issue,
            Status::ScheduledNoEpisode,
            Status::NoData,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<Status>("\"FINE\"").is_err());
    }

    #[test]
    fn link_kind_uses_snake_case_labels() {
        assert_eq!(serde_json::to_string(&LinkKind::Program).unwrap(), "\"program\"");
        assert_eq!(LinkKind::Episode.to_string(), "episode");
    }
}
