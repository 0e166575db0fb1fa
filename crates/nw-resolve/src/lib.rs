//! # nw-resolve
//!
//! Turns a language's schedule page for a date into report records.
//!
//! - [`assess`] checks one episode page: audio file sizes against a KB
//!   threshold and transcript length against a character threshold
//! - [`Resolver`] runs the strategy cascade for one language: schedule
//!   links first, then schedule audio files, then a `NO-DATA` record
//! - [`run_languages`] walks every language target in order and gathers a
//!   [`RunReport`](nw_core::RunReport)
//!
//! All network access goes through [`nw_fetch::PageFetcher`]. Nothing here
//! fails: fetch errors are recorded as issues on the affected records.

mod coordinator;
mod engine;
mod settings;
mod validator;

#[cfg(test)]
mod testing;

pub use coordinator::run_languages;
pub use engine::{Resolution, Resolver, Strategy};
pub use settings::ResolverSettings;
pub use validator::assess;
