//! Date evidence on program pages.
//!
//! A program page lists past episodes. The episode for a date is the first
//! episode anchor whose label, or the plain text within 200 characters of
//! it, contains one of the six renderings from [`date_variants`].

use chrono::{Datelike, NaiveDate};
use nw_core::{CandidateLink, LinkKind};

use crate::links::anchors;
use crate::markup::{char_window, strip_markup};

const CONTEXT_WINDOW: usize = 200;

/// The six literal renderings of `date`, in match order:
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `DD/MM/YYYY`, `MM/DD/YYYY`, `Mon D, YYYY`,
/// `Month D, YYYY`.
///
/// The two slash forms coincide when day and month are equal.
#[must_use]
pub fn date_variants(date: NaiveDate) -> [String; 6] {
    let (y, m, d) = (date.year(), date.month(), date.day());
    [
        format!("{y:04}-{m:02}-{d:02}"),
        format!("{y:04}/{m:02}/{d:02}"),
        format!("{d:02}/{m:02}/{y:04}"),
        format!("{m:02}/{d:02}/{y:04}"),
        date.format("%b %-d, %Y").to_string(),
        date.format("%B %-d, %Y").to_string(),
    ]
}

/// The first variant contained in `text`, if any.
#[must_use]
pub fn matching_variant<'a>(text: &str, variants: &'a [String]) -> Option<&'a str> {
    variants
        .iter()
        .find(|variant| text.contains(variant.as_str()))
        .map(String::as_str)
}

/// Outcome of looking for a date's episode on a program page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeLookup {
    /// An episode anchor carried date evidence.
    Dated(CandidateLink),
    /// No anchor matched; the first episode anchor on the page.
    Fallback(CandidateLink),
    /// The page has no episode anchors.
    Missing,
}

impl EpisodeLookup {
    /// The resolved episode, dated or fallback.
    #[must_use]
    pub const fn episode(&self) -> Option<&CandidateLink> {
        match self {
            Self::Dated(link) | Self::Fallback(link) => Some(link),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn is_dated(&self) -> bool {
        matches!(self, Self::Dated(_))
    }
}

/// Pick the episode for `date` from program page markup.
///
/// Anchors are checked in document order; the first with date evidence wins.
/// Without any evidence the first episode anchor is returned as a fallback.
#[must_use]
pub fn locate_episode(markup: &str, page_url: &str, date: NaiveDate) -> EpisodeLookup {
    let variants = date_variants(date);
    let mut first = None;

    for anchor in anchors(markup, page_url, LinkKind::Episode) {
        if matching_variant(&anchor.link.title, &variants).is_some() {
            return EpisodeLookup::Dated(anchor.link);
        }

        let context = strip_markup(char_window(markup, anchor.start, anchor.end, CONTEXT_WINDOW));
        if matching_variant(&context, &variants).is_some() {
            return EpisodeLookup::Dated(anchor.link);
        }

        if first.is_none() {
            first = Some(anchor.link);
        }
    }

    first.map_or(EpisodeLookup::Missing, EpisodeLookup::Fallback)
}
