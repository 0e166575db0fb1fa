use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::entities::ResolutionRecord;
use crate::enums::Status;

/// Everything one run produced: records in language order, then the
/// schedule-level alerts collected along the way.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub date: NaiveDate,
    pub started_at: DateTime<Local>,
    pub records: Vec<ResolutionRecord>,
    pub alerts: Vec<String>,
}

impl RunReport {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            started_at: Local::now(),
            records: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Number of records with `status`.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}
