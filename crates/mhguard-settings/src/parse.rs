use crate::error::SettingsError;
use anyhow::Context;
use mhguard_types::{SCHEMA_QUESTIONNAIRE_V1, questions};
use std::collections::BTreeMap;

const SCHEMA_KEY: &str = "schema";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionnaireFormat {
    Json,
    Toml,
}

impl QuestionnaireFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".toml") {
            QuestionnaireFormat::Toml
        } else {
            QuestionnaireFormat::Json
        }
    }

    pub fn parse(v: &str) -> Result<Self, SettingsError> {
        match v {
            "json" => Ok(QuestionnaireFormat::Json),
            "toml" => Ok(QuestionnaireFormat::Toml),
            other => Err(SettingsError::UnknownFormat(other.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            QuestionnaireFormat::Json => "json",
            QuestionnaireFormat::Toml => "toml",
        }
    }
}

/// Answers as read from a document, before required-key validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuestionnaire {
    /// Known question keys only.
    pub answers: BTreeMap<String, bool>,
    /// Keys that are neither questions nor `schema`, sorted.
    pub unknown_keys: Vec<String>,
}

/// A scalar pulled out of either document format.
enum Raw<'a> {
    Bool(bool),
    Str(&'a str),
    Other(&'static str),
}

pub fn parse_questionnaire(
    input: &str,
    format: QuestionnaireFormat,
) -> anyhow::Result<ParsedQuestionnaire> {
    match format {
        QuestionnaireFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(input).context("parse questionnaire json")?;
            let obj = value.as_object().ok_or(SettingsError::NotATable {
                expected: "JSON object",
            })?;
            collect(obj.iter().map(|(k, v)| (k.as_str(), json_raw(v))))
        }
        QuestionnaireFormat::Toml => {
            let table: toml::Table = toml::from_str(input).context("parse questionnaire toml")?;
            collect(table.iter().map(|(k, v)| (k.as_str(), toml_raw(v))))
        }
    }
}

fn json_raw(v: &serde_json::Value) -> Raw<'_> {
    match v {
        serde_json::Value::Bool(b) => Raw::Bool(*b),
        serde_json::Value::String(s) => Raw::Str(s),
        serde_json::Value::Null => Raw::Other("null"),
        serde_json::Value::Number(_) => Raw::Other("number"),
        serde_json::Value::Array(_) => Raw::Other("array"),
        serde_json::Value::Object(_) => Raw::Other("object"),
    }
}

fn toml_raw(v: &toml::Value) -> Raw<'_> {
    match v {
        toml::Value::Boolean(b) => Raw::Bool(*b),
        toml::Value::String(s) => Raw::Str(s),
        toml::Value::Integer(_) | toml::Value::Float(_) => Raw::Other("number"),
        toml::Value::Datetime(_) => Raw::Other("datetime"),
        toml::Value::Array(_) => Raw::Other("array"),
        toml::Value::Table(_) => Raw::Other("table"),
    }
}

fn collect<'a>(
    entries: impl Iterator<Item = (&'a str, Raw<'a>)>,
) -> anyhow::Result<ParsedQuestionnaire> {
    let mut parsed = ParsedQuestionnaire::default();

    for (key, raw) in entries {
        if key == SCHEMA_KEY {
            check_schema(raw)?;
            continue;
        }

        if questions::lookup_question(key).is_none() {
            parsed.unknown_keys.push(key.to_string());
            continue;
        }

        let value = match raw {
            Raw::Bool(b) => b,
            Raw::Str(_) => return Err(invalid(key, "string")),
            Raw::Other(found) => return Err(invalid(key, found)),
        };
        parsed.answers.insert(key.to_string(), value);
    }

    parsed.unknown_keys.sort();
    Ok(parsed)
}

fn check_schema(raw: Raw<'_>) -> anyhow::Result<()> {
    match raw {
        Raw::Str(SCHEMA_QUESTIONNAIRE_V1) => Ok(()),
        Raw::Str(other) => Err(SettingsError::UnsupportedSchema {
            found: other.to_string(),
            expected: SCHEMA_QUESTIONNAIRE_V1,
        }
        .into()),
        Raw::Bool(_) => Err(invalid(SCHEMA_KEY, "boolean")),
        Raw::Other(found) => Err(invalid(SCHEMA_KEY, found)),
    }
}

fn invalid(field: &str, found: &'static str) -> anyhow::Error {
    SettingsError::InvalidAnswer {
        field: field.to_string(),
        found,
    }
    .into()
}
