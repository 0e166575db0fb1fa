//! Program ids encoded in audio file names.
//!
//! Structured audio files are named `{YYYYMMDD}_{slot}_{pid}_{locale}.mp3`
//! (e.g. `20250901_2200_0111_fr.mp3`), older ones without the locale suffix.

use std::sync::LazyLock;

use regex::Regex;

static WITH_LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/[0-9]{8}_[0-9]{3,4}_([0-9]{3,6})_[a-z]{2}\.mp3$").expect("valid regex")
});
static WITHOUT_LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/[0-9]{8}_[0-9]{3,4}_([0-9]{3,6})\.mp3$").expect("valid regex")
});

/// Decode the program id from an audio address, without leading zeros.
///
/// An all-zero id normalizes to `"0"`. Addresses that follow neither naming
/// pattern yield `None`.
#[must_use]
pub fn infer_identity(audio_url: &str) -> Option<String> {
    [&*WITH_LOCALE, &*WITHOUT_LOCALE]
        .into_iter()
        .find_map(|pattern| pattern.captures(audio_url))
        .and_then(|caps| caps.get(1))
        .map(|pid| {
            let trimmed = pid.as_str().trim_start_matches('0');
            if trimmed.is_empty() {
                String::from("0")
            } else {
                trimmed.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://cdn.example.org/fr/files/20250901_2200_0111_fr.mp3", Some("111"))]
    #[case("https://cdn.example.org/20250901_0000_1472_en.mp3", Some("1472"))]
    #[case("https://cdn.example.org/krrti/files/202508/20250901_1830_0002_kr.mp3", Some("2"))]
    #[case("https://cdn.example.org/20250901_1830_0002.mp3", Some("2"))]
    #[case("https://cdn.example.org/20250901_1830_0000_DE.MP3", Some("0"))]
    #[case("https://cdn.example.org/20250901_183_000123_ja.mp3", Some("123"))]
    #[case("https://cdn.example.org/episode-final.mp3", None)]
    #[case("https://cdn.example.org/20250901_1830_0002_kr.mp3?dl=1", None)]
    #[case("https://cdn.example.org/20250901_1830_12_kr.mp3", None)]
    #[case("20250901_1830_0111_fr.mp3", None)]
    #[case("", None)]
    fn decodes_program_id(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(infer_identity(url).as_deref(), expected);
    }

    #[test]
    fn decoded_ids_never_keep_leading_zeros() {
        for url in [
            "https://x.org/20250101_0600_000900_en.mp3",
            "https://x.org/20250101_0600_0900.mp3",
        ] {
            let pid = infer_identity(url).unwrap();
            assert!(!pid.starts_with('0'));
            assert_eq!(infer_identity(url), Some(pid));
        }
    }
}
