//! Episode page health checks.

use nw_core::EpisodeAssessment;
use nw_fetch::PageFetcher;
use nw_scan::{extract_episode_audio, strip_markup};

/// Fetch an episode page and check its audio files and transcript text.
///
/// Never fails: an unreachable page yields an assessment with both checks
/// false and the fetch error as its only issue. Audio sizes come from
/// `fetch_size`, so a file whose size cannot be probed counts as 0 KB.
pub async fn assess<F: PageFetcher>(
    fetcher: &F,
    episode_url: &str,
    audio_min_kb: u64,
    transcript_min_chars: usize,
) -> EpisodeAssessment {
    let markup = match fetcher.fetch_text(episode_url).await {
        Ok(markup) => markup,
        Err(error) => {
            tracing::debug!(episode_url, %error, "episode fetch failed");
            return EpisodeAssessment::unreachable(format!("episode fetch failed: {error}"));
        }
    };

    let audio_urls = extract_episode_audio(&markup, episode_url);
    let mut audio_sizes_kb = Vec::with_capacity(audio_urls.len());
    for url in &audio_urls {
        audio_sizes_kb.push(fetcher.fetch_size(url).await / 1024);
    }
    let audio_ok = audio_sizes_kb.iter().any(|&kb| kb >= audio_min_kb);

    let transcript_len = strip_markup(&markup).chars().count();
    let transcript_ok = transcript_len >= transcript_min_chars;

    let mut issues = Vec::new();
    if !audio_ok {
        issues.push(format!("no audio asset >= {audio_min_kb} KB"));
    }
    if !transcript_ok {
        issues.push(format!("transcript too short ({transcript_len} chars)"));
    }

    EpisodeAssessment {
        audio_ok,
        transcript_ok,
        audio_urls,
        audio_sizes_kb,
        transcript_len,
        issues,
    }
}
