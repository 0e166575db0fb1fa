//! Entity structs for all Newswatch domain objects.
//!
//! Record-level structs derive `Serialize`, `Deserialize`, and `JsonSchema` so
//! they can be written to the JSON report and described by `nwatch schema`.
//! [`RunReport`] only serializes.

mod assessment;
mod language;
mod link;
mod record;
mod run;

pub use assessment::EpisodeAssessment;
pub use language::LanguageTarget;
pub use link::{AudioAsset, CandidateLink};
pub use record::ResolutionRecord;
pub use run::RunReport;
