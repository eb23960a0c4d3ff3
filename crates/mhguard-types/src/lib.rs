//! Stable DTOs and IDs used across the mhguard workspace.
//!
//! This crate is intentionally boring:
//! - question keys and questionnaire wording
//! - stable check IDs, law names, and resource links
//! - data types for the emitted assessment report
//! - explain registry for each check and law

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod questions;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use questions::{ALL_QUESTIONS, Question};
pub use receipt::{
    AssessmentReport, RequiredAction, ResourceLink, RunMeta, SCHEMA_QUESTIONNAIRE_V1,
    SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
