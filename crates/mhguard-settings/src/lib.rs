//! Questionnaire parsing, overrides, and samples.
//!
//! This crate is intentionally IO-free: it parses and resolves questionnaires provided as strings.

#![forbid(unsafe_code)]

mod error;
mod model;
mod parse;
mod resolve;
mod samples;

pub use error::SettingsError;
pub use model::QuestionnaireV1;
pub use parse::{ParsedQuestionnaire, QuestionnaireFormat, parse_questionnaire};
pub use resolve::{Overrides, ResolvedQuestionnaire, resolve_questionnaire};
pub use samples::{sample, sample_names};

use mhguard_domain::Questionnaire;

/// Serialize answers as a questionnaire document in the given format.
pub fn write_questionnaire(
    q: &Questionnaire,
    format: QuestionnaireFormat,
) -> anyhow::Result<String> {
    let doc = QuestionnaireV1::from_questionnaire(q);
    let mut text = match format {
        QuestionnaireFormat::Json => serde_json::to_string_pretty(&doc)?,
        QuestionnaireFormat::Toml => toml::to_string_pretty(&doc)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
