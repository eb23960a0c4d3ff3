use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for mhguard documents.
pub const SCHEMA_REPORT_V1: &str = "mhguard.report.v1";
pub const SCHEMA_QUESTIONNAIRE_V1: &str = "mhguard.questionnaire.v1";

/// The overall status of an assessment.
///
/// `Attention` is raised by any critical warning; it is the only status
/// that maps to a non-zero exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Attention,
}

/// A mandatory action with its ordered detail bullets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequiredAction {
    pub header: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl RequiredAction {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            details: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub duration_ms: u64,
}

/// The JSON report written by `mhguard check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub verdict: Verdict,

    /// SHA-256 over the canonical answer list; identical answers give an identical digest.
    pub questionnaire_digest: String,

    /// Sorted alphabetically.
    pub applicable_laws: Vec<String>,
    pub required_actions: Vec<RequiredAction>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,

    /// Registration order; names are unique.
    pub resources: Vec<ResourceLink>,
}
