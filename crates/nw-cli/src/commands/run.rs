use anyhow::Context;
use chrono::Local;
use nw_config::MonitorConfig;
use nw_core::{ResolutionRecord, RunReport};
use nw_fetch::HttpFetcher;
use nw_resolve::{Resolver, ResolverSettings, run_languages};
use nw_report::{ReportPaths, write_report};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::progress::Progress;

/// Handle `nwatch run`.
pub async fn handle(
    args: &RunArgs,
    config: &MonitorConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let targets = config.targets(args.batch.as_deref());
    if targets.is_empty() {
        tracing::warn!(batch = ?args.batch, "no languages configured for this run");
    }

    let fetcher = HttpFetcher::new(&config.http).context("failed to build HTTP client")?;
    let settings = ResolverSettings::from_config(config);
    let resolver = Resolver::new(&fetcher, &settings);

    let total = u64::try_from(targets.len()).unwrap_or(u64::MAX);
    let progress = Progress::bar(total, &format!("checking {date}"));
    let report = run_languages(&resolver, &targets, date, |target, records| {
        progress.set_message(&target.display_name);
        if !flags.quiet {
            for record in records {
                progress.println(&progress_line(record));
            }
        }
        progress.inc(1);
    })
    .await;
    progress.finish_clear();

    let paths = write_report(&report, &config.output).context("failed to write report files")?;
    println!("{}", summary(&report, &paths));
    Ok(())
}

/// One console line per record.
fn progress_line(record: &ResolutionRecord) -> String {
    format!(
        "[{}] {} | {} | audio_ok={} | transcript_len={}",
        record.status,
        record.lang,
        record.program_title,
        record.audio_ok.map(|ok| ok.to_string()).unwrap_or_default(),
        record
            .transcript_len
            .map(|len| len.to_string())
            .unwrap_or_default(),
    )
}

/// Saved paths, then the alerts raised during the run.
fn summary(report: &RunReport, paths: &ReportPaths) -> String {
    let mut lines = vec![format!(
        "Saved: {} and {}",
        paths.table.display(),
        paths.json.display()
    )];
    if !report.alerts.is_empty() {
        lines.push(String::from("Alerts:"));
        lines.extend(report.alerts.iter().map(|alert| format!(" - {alert}")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use nw_core::Status;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(
        status: Status,
        audio_ok: Option<bool>,
        transcript_len: Option<usize>,
    ) -> ResolutionRecord {
        ResolutionRecord {
            timestamp: String::from("2025-09-01 06:00:00"),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            lang_code: String::from("en"),
            lang: String::from("English"),
            program_title: String::from("Morning News"),
            program_url: String::new(),
            episode_title: String::new(),
            episode_url: String::new(),
            audio_ok,
            audio_urls: Vec::new(),
            audio_sizes_kb: Vec::new(),
            transcript_len,
            transcript_ok: None,
            status,
            issues: Vec::new(),
        }
    }

    fn paths() -> ReportPaths {
        ReportPaths {
            table: PathBuf::from("out/schedule-report-20250901-060000.csv"),
            json: PathBuf::from("out/schedule-report-20250901-060000.json"),
        }
    }

    #[test]
    fn progress_line_shows_checks() {
        assert_eq!(
            progress_line(&record(Status::Issue, Some(false), Some(512))),
            "[ISSUE] English | Morning News | audio_ok=false | transcript_len=512"
        );
    }

    #[test]
    fn progress_line_leaves_missing_checks_blank() {
        assert_eq!(
            progress_line(&record(Status::NoData, None, None)),
            "[NO-DATA] English | Morning News | audio_ok= | transcript_len="
        );
    }

    #[test]
    fn summary_lists_alerts_after_paths() {
        let mut report = RunReport::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        report
            .alerts
            .push(String::from("[French] schedule fetch failed: HTTP 503"));

        assert_eq!(
            summary(&report, &paths()),
            "Saved: out/schedule-report-20250901-060000.csv and \
             out/schedule-report-20250901-060000.json\n\
             Alerts:\n - [French] schedule fetch failed: HTTP 503"
        );
    }

    #[test]
    fn summary_without_alerts_is_one_line() {
        let report = RunReport::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(summary(&report, &paths()).lines().count(), 1);
    }
}
