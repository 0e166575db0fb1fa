//! Report output configuration.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    String::from("out")
}

fn default_file_prefix() -> String {
    String::from("schedule-report")
}

fn default_delimiter() -> String {
    String::from(",")
}

fn default_list_separator() -> String {
    String::from(";")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the report files are written into (created on demand).
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Single-character field delimiter of the tabular report.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Separator between multiple audio addresses or sizes in one cell.
    #[serde(default = "default_list_separator")]
    pub audio_separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            file_prefix: default_file_prefix(),
            delimiter: default_delimiter(),
            audio_separator: default_list_separator(),
        }
    }
}

impl OutputConfig {
    /// The delimiter as a char. Falls back to `,` if unset.
    #[must_use]
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }

    /// `tsv` for a tab delimiter, `csv` otherwise.
    #[must_use]
    pub fn table_extension(&self) -> &'static str {
        if self.delimiter_char() == '\t' { "tsv" } else { "csv" }
    }
}
