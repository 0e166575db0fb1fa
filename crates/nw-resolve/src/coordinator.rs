//! Sequential run over all language targets.

use chrono::NaiveDate;
use nw_core::{LanguageTarget, ResolutionRecord, RunReport};
use nw_fetch::PageFetcher;

use crate::engine::Resolver;

/// Resolve every target in order and collect records and alerts.
///
/// `observe` sees each language's records as soon as they are resolved,
/// which lets callers print progress while the run continues. A failing
/// language never stops the run.
pub async fn run_languages<F, O>(
    resolver: &Resolver<'_, F>,
    targets: &[LanguageTarget],
    date: NaiveDate,
    mut observe: O,
) -> RunReport
where
    F: PageFetcher,
    O: FnMut(&LanguageTarget, &[ResolutionRecord]),
{
    let mut report = RunReport::new(date);

    for target in targets {
        tracing::debug!(lang = %target.code, "resolving language");
        let resolution = resolver.resolve(target, date).await;
        observe(target, &resolution.records);
        report.records.extend(resolution.records);
        report.alerts.extend(resolution.alert);
    }

    report
}
