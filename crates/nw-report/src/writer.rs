//! Report files for one run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use nw_config::OutputConfig;
use nw_core::RunReport;

use crate::delimited::render_delimited;
use crate::error::ReportError;

/// Where a run's two report files were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Delimited file (`.csv`, or `.tsv` for a tab delimiter).
    pub table: PathBuf,
    pub json: PathBuf,
}

/// File name stem shared by both files: `{prefix}-{YYYYMMDD-HHMMSS}`.
#[must_use]
pub fn report_stem(prefix: &str, started_at: &DateTime<Local>) -> String {
    format!("{prefix}-{}", started_at.format("%Y%m%d-%H%M%S"))
}

/// Write the delimited and JSON reports for `report` into `config.dir`,
/// creating the directory when needed.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory cannot be created, the records
/// cannot be serialized, or either file cannot be written.
pub fn write_report(report: &RunReport, config: &OutputConfig) -> Result<ReportPaths, ReportError> {
    let dir = Path::new(&config.dir);
    fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let stem = report_stem(&config.file_prefix, &report.started_at);
    let paths = ReportPaths {
        table: dir.join(format!("{stem}.{}", config.table_extension())),
        json: dir.join(format!("{stem}.json")),
    };

    let table = render_delimited(
        &report.records,
        config.delimiter_char(),
        &config.audio_separator,
    );
    write_file(&paths.table, &table)?;

    let json = serde_json::to_string_pretty(&report.records)?;
    write_file(&paths.json, &json)?;

    tracing::debug!(
        records = report.records.len(),
        table = %paths.table.display(),
        json = %paths.json.display(),
        "report written"
    );
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
