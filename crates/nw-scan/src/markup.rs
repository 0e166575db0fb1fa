//! Markup reduction and address helpers.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static CHAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[xX]([0-9A-Fa-f]{1,6})|#([0-9]{1,7})|([A-Za-z][A-Za-z0-9]{1,7}));")
        .expect("valid regex")
});

/// Named references seen on broadcaster pages. Anything else is left as is.
const NAMED_REFS: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", " "),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("hellip", "\u{2026}"),
];

/// Reduce markup to plain text: drop script and style blocks and every tag,
/// decode character references, then collapse whitespace runs to single
/// spaces.
#[must_use]
pub fn strip_markup(markup: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(markup, " ");
    let text = STYLE_BLOCK.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    let text = decode_entities(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Decode numeric (`&#39;`, `&#x2019;`) and common named (`&amp;`, `&nbsp;`)
/// character references.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    CHAR_REF
        .replace_all(text, |caps: &Captures<'_>| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str()
                    .parse()
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else {
                caps.get(3).and_then(|name| {
                    NAMED_REFS
                        .iter()
                        .find(|(known, _)| *known == name.as_str())
                        .map(|(_, value)| (*value).to_string())
                })
            };
            decoded.unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Parse the address of a scanned page so its links can be resolved.
#[must_use]
pub fn page_base(page_url: &str) -> Option<Url> {
    Url::parse(page_url).ok()
}

/// Resolve a raw `href` attribute value found on the page at `base`.
///
/// Character references are decoded first. Without a base only absolute
/// addresses resolve. Returns `None` for values that are not addresses.
#[must_use]
pub fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    let href = decode_entities(href.trim());
    let resolved = match base {
        Some(base) => base.join(&href),
        None => Url::parse(&href),
    };
    resolved.ok().map(String::from)
}

/// Slice of `text` reaching `radius` characters before `start` and after
/// `end` (byte offsets on char boundaries), clamped to the text.
#[must_use]
pub fn char_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(index, _)| index);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(index, _)| end + index);
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn strips_scripts_styles_and_tags() {
        let html = "<html><head><style>p { color: red }</style>\
                    <script type=\"text/javascript\">var x = '<b>';</script></head>\
                    <body><h1>Morning\n  News</h1><p>Top   story</p></body></html>";
        assert_eq!(strip_markup(html), "Morning News Top story");
    }

    #[test]
    fn strip_markup_of_plain_text_only_collapses_whitespace() {
        assert_eq!(strip_markup("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn strip_markup_decodes_character_references() {
        assert_eq!(
            strip_markup("<h3>Taiwan&nbsp;&amp;&nbsp;You</h3><p>It&#39;s &#x201C;live&#x201D;</p>"),
            "Taiwan & You It's \u{201C}live\u{201D}"
        );
    }

    #[rstest]
    #[case("a &amp;amp; b", "a &amp; b")]
    #[case("&unknown; &#xZZ; &", "&unknown; &#xZZ; &")]
    #[case("&#1114112;", "&#1114112;")]
    #[case("caf&#233;", "café")]
    fn decoding_is_single_pass_and_keeps_unknown_references(
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(decode_entities(raw), expected);
    }

    const PAGE: &str = "https://www.example.org/en/program?uid=4&pid=111";

    #[rstest]
    #[case("//cdn.example.org/a.mp3", "https://cdn.example.org/a.mp3")]
    #[case("http://other.org/x", "http://other.org/x")]
    #[case("/fr/program?pid=1", "https://www.example.org/fr/program?pid=1")]
    #[case("programnews?id=5", "https://www.example.org/en/programnews?id=5")]
    #[case("./programnews?id=5", "https://www.example.org/en/programnews?id=5")]
    #[case("../media/a.mp3", "https://www.example.org/media/a.mp3")]
    #[case("/fr/program?uid=4&amp;pid=111", "https://www.example.org/fr/program?uid=4&pid=111")]
    fn hrefs_join_against_the_page_address(#[case] href: &str, #[case] expected: &str) {
        let base = page_base(PAGE);
        assert_eq!(resolve_href(base.as_ref(), href).as_deref(), Some(expected));
    }

    #[test]
    fn protocol_relative_href_takes_the_page_scheme() {
        let base = page_base("http://localhost:8080/en/programschedule");
        assert_eq!(
            resolve_href(base.as_ref(), "//cdn.local/a.mp3").as_deref(),
            Some("http://cdn.local/a.mp3")
        );
    }

    #[test]
    fn without_a_base_only_absolute_hrefs_resolve() {
        assert_eq!(page_base("not a url"), None);
        assert_eq!(
            resolve_href(None, "https://cdn.example.org/a.mp3").as_deref(),
            Some("https://cdn.example.org/a.mp3")
        );
        assert_eq!(resolve_href(None, "/en/program?id=1"), None);
    }

    #[test]
    fn char_window_counts_characters_not_bytes() {
        let text = "ééé[x]ééé";
        let start = text.find('[').unwrap();
        let end = text.find(']').unwrap() + 1;
        assert_eq!(char_window(text, start, end, 2), "éé[x]éé");
        assert_eq!(char_window(text, start, end, 10), text);
        assert_eq!(char_window(text, start, end, 0), "[x]");
    }
}
