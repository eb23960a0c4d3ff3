use crate::error::SettingsError;
use crate::parse::ParsedQuestionnaire;
use mhguard_domain::Questionnaire;
use mhguard_types::questions;
use std::collections::BTreeMap;

/// Answers supplied on the command line; they win over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub answers: BTreeMap<String, bool>,
}

impl Overrides {
    /// Parse `KEY=true|false` assignments. Keys must be known questions.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, SettingsError> {
        let mut answers = BTreeMap::new();
        for raw in assignments {
            let raw = raw.as_ref();
            let invalid = || SettingsError::InvalidOverride {
                assignment: raw.to_string(),
            };

            let (key, value) = raw.split_once('=').ok_or_else(invalid)?;
            let key = key.trim();
            let value = match value.trim() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => return Err(invalid()),
            };

            if questions::lookup_question(key).is_none() {
                return Err(SettingsError::UnknownOverride {
                    key: key.to_string(),
                });
            }
            answers.insert(key.to_string(), value);
        }
        Ok(Self { answers })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedQuestionnaire {
    pub questionnaire: Questionnaire,
    pub unknown_keys: Vec<String>,
}

/// Apply overrides and check that every question is answered.
pub fn resolve_questionnaire(
    parsed: &ParsedQuestionnaire,
    overrides: &Overrides,
) -> anyhow::Result<ResolvedQuestionnaire> {
    let mut answers = parsed.answers.clone();
    for (key, value) in &overrides.answers {
        answers.insert(key.clone(), *value);
    }

    for key in &parsed.unknown_keys {
        tracing::warn!(key = key.as_str(), "ignoring unknown questionnaire key");
    }

    let questionnaire = Questionnaire::from_answers(&answers)?;

    Ok(ResolvedQuestionnaire {
        questionnaire,
        unknown_keys: parsed.unknown_keys.clone(),
    })
}
