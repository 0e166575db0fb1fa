//! Delimited (CSV/TSV) rendering of report records.

use nw_core::ResolutionRecord;

/// Header row, in column order.
pub const FIELDS: [&str; 14] = [
    "timestamp",
    "date",
    "lang",
    "program_title",
    "program_url",
    "episode_title",
    "episode_url",
    "audio_ok",
    "audio_urls",
    "audio_sizes_kb",
    "transcript_len",
    "transcript_ok",
    "status",
    "issues",
];

/// Render `records` with a header row, one line per record.
#[must_use]
pub fn render_delimited(
    records: &[ResolutionRecord],
    delimiter: char,
    audio_separator: &str,
) -> String {
    let mut out = join_row(FIELDS.iter().map(ToString::to_string), delimiter);
    for record in records {
        out.push_str(&join_row(record_cells(record, audio_separator), delimiter));
    }
    out
}

fn record_cells(record: &ResolutionRecord, audio_separator: &str) -> [String; 14] {
    [
        record.timestamp.clone(),
        record.date.to_string(),
        record.lang.clone(),
        record.program_title.clone(),
        record.program_url.clone(),
        record.episode_title.clone(),
        record.episode_url.clone(),
        optional(record.audio_ok),
        record.audio_urls.join(audio_separator),
        record
            .audio_sizes_kb
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(audio_separator),
        optional(record.transcript_len),
        optional(record.transcript_ok),
        record.status.to_string(),
        record.issue_text(),
    ]
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn join_row(cells: impl IntoIterator<Item = String>, delimiter: char) -> String {
    let mut line = cells
        .into_iter()
        .map(|cell| quote_cell(&sanitize_cell(&cell), delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    line.push('\n');
    line
}

/// Keep each record on one line: line breaks become spaces, whitespace runs
/// collapse, ends are trimmed.
fn sanitize_cell(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn quote_cell(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
