//! The per-language resolution cascade.
//!
//! A schedule page is mined by ranked strategies. Each one appends records
//! to a shared per-language pass; the first strategy that appends anything ends the
//! cascade. When none does, the language gets a single `NO-DATA` record.

use chrono::{Local, NaiveDate};
use nw_core::{
    AudioAsset, CandidateLink, EpisodeAssessment, LanguageTarget, LinkKind, ResolutionRecord,
    Status,
};
use nw_fetch::PageFetcher;
use nw_scan::{
    EpisodeLookup, extract_audio_items, extract_links, infer_identity, locate_episode,
};

use crate::settings::ResolverSettings;
use crate::validator::assess;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Evidence sources on a schedule page, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Program and episode anchors.
    ScheduleLinks,
    /// Audio files, traced back to their program page when possible.
    ScheduleAudio,
}

impl Strategy {
    pub const ORDER: [Self; 2] = [Self::ScheduleLinks, Self::ScheduleAudio];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScheduleLinks => "schedule_links",
            Self::ScheduleAudio => "schedule_audio",
        }
    }
}

/// Records for one language, plus the alert raised when its schedule page
/// could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub records: Vec<ResolutionRecord>,
    pub alert: Option<String>,
}

/// Resolves a language's schedule for a date into report records.
pub struct Resolver<'a, F> {
    fetcher: &'a F,
    settings: &'a ResolverSettings,
}

impl<'a, F: PageFetcher> Resolver<'a, F> {
    #[must_use]
    pub const fn new(fetcher: &'a F, settings: &'a ResolverSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Run the cascade for `target` on `date`.
    ///
    /// Always yields at least one record. Fetch failures become issues on
    /// records; only a schedule fetch failure is also reported as an alert.
    pub async fn resolve(&self, target: &LanguageTarget, date: NaiveDate) -> Resolution {
        let schedule_url = self.settings.site.schedule_url(target, date);
        let mut pass = Pass::new(target, date, &schedule_url);
        let mut alert = None;

        match self.fetcher.fetch_text(&schedule_url).await {
            Ok(markup) => {
                for strategy in Strategy::ORDER {
                    let produced = self.apply(strategy, &mut pass, &markup).await;
                    tracing::debug!(
                        lang = %target.code,
                        strategy = strategy.as_str(),
                        produced,
                        "strategy finished"
                    );
                    if produced > 0 {
                        break;
                    }
                }
            }
            Err(error) => {
                tracing::warn!(lang = %target.code, %schedule_url, %error, "schedule fetch failed");
                alert = Some(format!(
                    "[{}] schedule fetch failed: {error}",
                    target.display_name
                ));
            }
        }

        if pass.records.is_empty() {
            pass.push_no_data();
        }

        Resolution {
            records: pass.records,
            alert,
        }
    }

    async fn apply(&self, strategy: Strategy, pass: &mut Pass<'_>, markup: &str) -> usize {
        let before = pass.records.len();
        match strategy {
            Strategy::ScheduleLinks => self.schedule_links(pass, markup).await,
            Strategy::ScheduleAudio => self.schedule_audio(pass, markup).await,
        }
        pass.records.len() - before
    }

    /// Assess episode anchors directly and look up the day's episode behind
    /// program anchors, in schedule order.
    async fn schedule_links(&self, pass: &mut Pass<'_>, markup: &str) {
        let links = extract_links(markup, pass.schedule_url);
        tracing::debug!(lang = %pass.target.code, candidates = links.len(), "schedule links");

        for candidate in &links.candidates {
            match candidate.kind {
                LinkKind::Episode => {
                    let assessment = self.assess_episode(pass.target, &candidate.url).await;
                    pass.push_assessed(
                        &candidate.title,
                        pass.schedule_url,
                        candidate,
                        assessment,
                    );
                }
                LinkKind::Program => self.resolve_program(pass, candidate).await,
            }
        }
    }

    async fn resolve_program(&self, pass: &mut Pass<'_>, program: &CandidateLink) {
        let lookup = match self.lookup_episode(&program.url, pass.date).await {
            Ok(lookup) => lookup,
            Err(reason) => {
                pass.push_scheduled_no_episode(program, reason);
                return;
            }
        };

        match lookup.episode() {
            Some(episode) => {
                let assessment = self.assess_episode(pass.target, &episode.url).await;
                pass.push_assessed(&program.title, &program.url, episode, assessment);
            }
            None => pass.push_scheduled_no_episode(
                program,
                String::from("no episode link for target date"),
            ),
        }
    }

    /// Trace each audio file on the schedule to its program page; fall back
    /// to a record for the file itself.
    async fn schedule_audio(&self, pass: &mut Pass<'_>, markup: &str) {
        let assets = extract_audio_items(markup, pass.schedule_url, &self.settings.title_hints);
        tracing::debug!(lang = %pass.target.code, assets = assets.len(), "schedule audio");

        for asset in &assets {
            let size = self.fetcher.fetch_size(&asset.url).await;

            if let Some((program_url, episode)) = self.trace_asset(pass, asset).await {
                let assessment = self.assess_episode(pass.target, &episode.url).await;
                pass.push_assessed(&asset.title, &program_url, &episode, assessment);
            } else {
                let exempt = self.settings.is_transcript_exempt(&asset.title);
                pass.push_raw_audio(asset, size, exempt);
            }
        }
    }

    /// Program page address and episode for an audio file whose name
    /// carries a program id.
    async fn trace_asset(
        &self,
        pass: &Pass<'_>,
        asset: &AudioAsset,
    ) -> Option<(String, CandidateLink)> {
        let pid = infer_identity(&asset.url)?;
        let program_url = self.settings.site.program_url(pass.target, &pid);

        let lookup = match self.lookup_episode(&program_url, pass.date).await {
            Ok(lookup) => lookup,
            Err(reason) => {
                tracing::debug!(%pid, title = %asset.title, %reason, "using raw audio");
                return None;
            }
        };

        let Some(episode) = lookup.episode().filter(|episode| !episode.url.is_empty()) else {
            tracing::debug!(%pid, title = %asset.title, "program page lists no episode");
            return None;
        };

        let mut episode = episode.clone();
        if episode.title.is_empty() {
            episode.title.clone_from(&asset.title);
        }
        Some((program_url, episode))
    }

    /// Fetch a program page and pick the episode for `date`.
    async fn lookup_episode(
        &self,
        program_url: &str,
        date: NaiveDate,
    ) -> Result<EpisodeLookup, String> {
        let markup = self
            .fetcher
            .fetch_text(program_url)
            .await
            .map_err(|error| format!("program page fetch failed: {error}"))?;
        Ok(locate_episode(&markup, program_url, date))
    }

    async fn assess_episode(&self, target: &LanguageTarget, episode_url: &str) -> EpisodeAssessment {
        assess(
            self.fetcher,
            episode_url,
            target.audio_min_kb,
            target.transcript_min_chars,
        )
        .await
    }
}

// ── Records ────────────────────────────────────────────────────────

/// Records accumulated for one language on one date.
struct Pass<'a> {
    target: &'a LanguageTarget,
    date: NaiveDate,
    schedule_url: &'a str,
    records: Vec<ResolutionRecord>,
}

impl<'a> Pass<'a> {
    const fn new(target: &'a LanguageTarget, date: NaiveDate, schedule_url: &'a str) -> Self {
        Self {
            target,
            date,
            schedule_url,
            records: Vec::new(),
        }
    }

    fn blank(&self, status: Status) -> ResolutionRecord {
        ResolutionRecord {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            date: self.date,
            lang_code: self.target.code.clone(),
            lang: self.target.display_name.clone(),
            program_title: String::new(),
            program_url: String::new(),
            episode_title: String::new(),
            episode_url: String::new(),
            audio_ok: None,
            audio_urls: Vec::new(),
            audio_sizes_kb: Vec::new(),
            transcript_len: None,
            transcript_ok: None,
            status,
            issues: Vec::new(),
        }
    }

    fn push_assessed(
        &mut self,
        program_title: &str,
        program_url: &str,
        episode: &CandidateLink,
        assessment: EpisodeAssessment,
    ) {
        let record = ResolutionRecord {
            program_title: program_title.to_string(),
            program_url: program_url.to_string(),
            episode_title: episode.title.clone(),
            episode_url: episode.url.clone(),
            audio_ok: Some(assessment.audio_ok),
            audio_urls: assessment.audio_urls,
            audio_sizes_kb: assessment.audio_sizes_kb,
            transcript_len: Some(assessment.transcript_len),
            transcript_ok: Some(assessment.transcript_ok),
            issues: assessment.issues,
            ..self.blank(Status::from_checks(assessment.audio_ok, assessment.transcript_ok))
        };
        self.records.push(record);
    }

    fn push_scheduled_no_episode(&mut self, program: &CandidateLink, issue: String) {
        let record = ResolutionRecord {
            program_title: program.title.clone(),
            program_url: program.url.clone(),
            audio_ok: Some(false),
            transcript_len: Some(0),
            transcript_ok: Some(false),
            issues: vec![issue],
            ..self.blank(Status::ScheduledNoEpisode)
        };
        self.records.push(record);
    }

    fn push_raw_audio(&mut self, asset: &AudioAsset, size_bytes: u64, transcript_exempt: bool) {
        let audio_ok = size_bytes >= self.target.audio_min_kb.saturating_mul(1024);
        let issue = if transcript_exempt {
            "transcript not required for this program"
        } else {
            "no newscast page found for this program on schedule"
        };
        let record = ResolutionRecord {
            program_title: asset.title.clone(),
            program_url: self.schedule_url.to_string(),
            episode_title: asset.title.clone(),
            episode_url: asset.url.clone(),
            audio_ok: Some(audio_ok),
            audio_urls: vec![asset.url.clone()],
            audio_sizes_kb: vec![size_bytes / 1024],
            transcript_ok: Some(transcript_exempt),
            issues: vec![issue.to_string()],
            ..self.blank(Status::from_checks(audio_ok, transcript_exempt))
        };
        self.records.push(record);
    }

    fn push_no_data(&mut self) {
        let record = ResolutionRecord {
            program_url: self.schedule_url.to_string(),
            issues: vec![String::from("no program, episode or audio found on schedule")],
            ..self.blank(Status::NoData)
        };
        self.records.push(record);
    }
}
