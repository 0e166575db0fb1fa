use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LinkKind;

/// A program or episode anchor found on a schedule or program page.
///
/// Identity is the absolute `url`; extractors keep the first title seen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CandidateLink {
    pub title: String,
    pub url: String,
    pub kind: LinkKind,
}

/// A raw audio file referenced from schedule markup, with a best-effort
/// title guessed from the surrounding text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AudioAsset {
    pub title: String,
    pub url: String,
}
