//! # nw-scan
//!
//! Markup scanning for Newswatch. Everything here is pure: it takes page
//! markup that was already fetched and returns what it found.
//!
//! - [`markup`]: tag stripping, character references, relative address joining
//! - [`links`]: program/episode anchors and audio files on schedule pages
//! - [`dates`]: locale renderings of a date and the program-page episode lookup
//! - [`identity`]: program ids decoded from structured audio file names

pub mod dates;
pub mod identity;
pub mod links;
pub mod markup;

pub use dates::{EpisodeLookup, date_variants, locate_episode};
pub use identity::infer_identity;
pub use links::{LinkSet, extract_audio_items, extract_episode_audio, extract_links};
pub use markup::{decode_entities, page_base, resolve_href, strip_markup};
