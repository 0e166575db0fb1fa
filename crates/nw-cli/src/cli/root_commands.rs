use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check every configured language for a date and write the reports.
    Run(RunArgs),
    /// List the language targets a run would check.
    Languages(LanguagesArgs),
    /// Print the JSON Schema of a report record.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Target date (YYYY-MM-DD); defaults to today
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only check languages tagged with this batch label
    #[arg(short, long)]
    pub batch: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LanguagesArgs {
    /// Only list languages tagged with this batch label
    #[arg(short, long)]
    pub batch: Option<String>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}
