//! # nw-core
//!
//! Core types for Newswatch.
//!
//! This crate provides the foundational types shared across all Newswatch crates:
//! - Language targets, one per broadcast edition
//! - Candidate links and audio assets found on schedule and program pages
//! - Episode assessments and the resolution records written to reports
//! - The run report handed to the reporting sink
//! - Status and link-kind enums

pub mod entities;
pub mod enums;

pub use entities::{
    AudioAsset, CandidateLink, EpisodeAssessment, LanguageTarget, ResolutionRecord, RunReport,
};
pub use enums::{LinkKind, Status};
