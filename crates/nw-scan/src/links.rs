//! Candidate link and audio file extraction from schedule markup.
//!
//! Both extractors deduplicate by resolved address and keep the first
//! occurrence, so report rows come out in document order.

use std::collections::HashSet;
use std::sync::LazyLock;

use nw_core::{AudioAsset, CandidateLink, LinkKind};
use regex::Regex;

use crate::markup::{char_window, page_base, resolve_href, strip_markup};

/// Query part accepted after `/program` or `/programnews`: the program id key
/// (`id` or `pid`), optionally after other parameters.
const ID_QUERY: &str = r#"\?(?:[^"'<>\s]*?&(?:amp;)?)?p?id="#;

/// Characters of surrounding markup used to guess an audio file's title.
const TITLE_WINDOW: usize = 2000;
const TITLE_MAX_CHARS: usize = 80;

fn anchor_pattern(path: &str) -> Regex {
    let target = format!("{path}{ID_QUERY}");
    Regex::new(&format!(
        r#"(?is)<a[^>]+href=(?:"([^"]*?{target}[^"]+)"|'([^']*?{target}[^']+)')[^>]*>(.*?)</a>"#
    ))
    .expect("valid regex")
}

static PROGRAM_ANCHOR: LazyLock<Regex> = LazyLock::new(|| anchor_pattern("/program"));
static EPISODE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| anchor_pattern("/programnews"));
static ATTR_AUDIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:src|href)\s*=\s*(?:"([^"]+\.mp3(?:\?[^"]*)?)"|'([^']+\.mp3(?:\?[^']*)?)')"#,
    )
    .expect("valid regex")
});
static PLAIN_AUDIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s"'<>()]+\.mp3(?:\?[^\s"'<>()]+)?"#).expect("valid regex")
});
static EPISODE_AUDIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:src|href)\s*=\s*(?:"([^"]+\.(?:mp3|m4a|aac|wav|ogg)(?:\?[^"]*)?)"|'([^']+\.(?:mp3|m4a|aac|wav|ogg)(?:\?[^']*)?)')"#,
    )
    .expect("valid regex")
});
static IMG_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bimg\b.*").expect("valid regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static TITLE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9’'\-.,:()!?\x{00C0}-\x{024F}\s]").expect("valid regex")
});

// ── Anchors ────────────────────────────────────────────────────────

/// One anchor match with its byte span in the scanned markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMatch {
    pub link: CandidateLink,
    pub start: usize,
    pub end: usize,
}

/// Every anchor of `kind` on the page at `page_url`, in document order,
/// duplicates included. Anchors whose address cannot be resolved are skipped.
#[must_use]
pub fn anchors(markup: &str, page_url: &str, kind: LinkKind) -> Vec<AnchorMatch> {
    let pattern = match kind {
        LinkKind::Program => &*PROGRAM_ANCHOR,
        LinkKind::Episode => &*EPISODE_ANCHOR,
    };
    let base = page_base(page_url);

    pattern
        .captures_iter(markup)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let href = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let label = caps.get(3).map_or("", |m| m.as_str());
            Some(AnchorMatch {
                link: CandidateLink {
                    title: strip_markup(label),
                    url: resolve_href(base.as_ref(), href)?,
                    kind,
                },
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Program and episode candidates found on one schedule page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    /// All candidates in document order, unique by address.
    pub candidates: Vec<CandidateLink>,
}

impl LinkSet {
    pub fn programs(&self) -> impl Iterator<Item = &CandidateLink> {
        self.candidates
            .iter()
            .filter(|link| link.kind == LinkKind::Program)
    }

    pub fn episodes(&self) -> impl Iterator<Item = &CandidateLink> {
        self.candidates
            .iter()
            .filter(|link| link.kind == LinkKind::Episode)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Find `/program?id=…` and `/programnews?id=…` anchors in schedule markup.
///
/// Labels are reduced to plain text and addresses resolved against
/// `page_url`. An address seen twice keeps its first title.
#[must_use]
pub fn extract_links(markup: &str, page_url: &str) -> LinkSet {
    let mut found = anchors(markup, page_url, LinkKind::Program);
    found.extend(anchors(markup, page_url, LinkKind::Episode));
    found.sort_by_key(|anchor| anchor.start);

    let mut seen = HashSet::new();
    let candidates = found
        .into_iter()
        .filter(|anchor| seen.insert(anchor.link.url.clone()))
        .map(|anchor| anchor.link)
        .collect();
    LinkSet { candidates }
}

// ── Audio ──────────────────────────────────────────────────────────

/// Find `.mp3` files referenced by schedule markup.
///
/// Attribute values (`src=`/`href=`) are collected first, then absolute
/// addresses appearing anywhere in the text (e.g. inside script data). Each
/// address is kept once; the first occurrence decides its title guess.
#[must_use]
pub fn extract_audio_items(
    markup: &str,
    page_url: &str,
    title_hints: &[String],
) -> Vec<AudioAsset> {
    let base = page_base(page_url);
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for caps in ATTR_AUDIO.captures_iter(markup) {
        let (Some(whole), Some(href)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) else {
            continue;
        };
        let Some(url) = resolve_href(base.as_ref(), href.as_str()) else {
            continue;
        };
        if seen.insert(url.clone()) {
            let title = guess_title(markup, whole.start(), whole.end(), title_hints);
            items.push(AudioAsset { title, url });
        }
    }

    for found in PLAIN_AUDIO.find_iter(markup) {
        let Some(url) = resolve_href(None, found.as_str()) else {
            continue;
        };
        if seen.insert(url.clone()) {
            let title = guess_title(markup, found.start(), found.end(), title_hints);
            items.push(AudioAsset { title, url });
        }
    }

    items
}

/// Audio files an episode page references through `src=`/`href=`
/// attributes, resolved against `page_url`, first occurrence kept.
#[must_use]
pub fn extract_episode_audio(markup: &str, page_url: &str) -> Vec<String> {
    let base = page_base(page_url);
    let mut seen = HashSet::new();
    EPISODE_AUDIO
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .filter_map(|href| resolve_href(base.as_ref(), href.as_str()))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Title for an audio file: the first known program fragment mentioned near
/// it, otherwise the cleaned nearby text.
fn guess_title(markup: &str, start: usize, end: usize, title_hints: &[String]) -> String {
    let context = strip_markup(char_window(markup, start, end, TITLE_WINDOW));
    let lowered = context.to_lowercase();
    title_hints
        .iter()
        .find(|hint| lowered.contains(&hint.to_lowercase()))
        .cloned()
        .unwrap_or_else(|| clean_title(&context))
}

fn clean_title(text: &str) -> String {
    let text = IMG_TAIL.replace(text, "");
    let text = SPACE_RUN.replace_all(text.trim(), " ");
    let text = TITLE_NOISE.replace_all(&text, " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    text.trim().chars().take(TITLE_MAX_CHARS).collect()
}
