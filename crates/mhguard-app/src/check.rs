//! The `check` use case: resolve answers, evaluate, and produce a report.

use anyhow::Context;
use mhguard_settings::{Overrides, QuestionnaireFormat};
use mhguard_types::{AssessmentReport, Verdict};
use time::OffsetDateTime;

use crate::report::build_report;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Questionnaire document contents.
    pub questionnaire_text: &'a str,
    pub format: QuestionnaireFormat,
    /// `--set` answers, applied over the document.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: AssessmentReport,
    /// Keys in the document that are not questions.
    pub unknown_keys: Vec<String>,
}

/// Run the check use case: parse the questionnaire, apply overrides, evaluate, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let parsed = mhguard_settings::parse_questionnaire(input.questionnaire_text, input.format)
        .context("parse questionnaire")?;
    let resolved = mhguard_settings::resolve_questionnaire(&parsed, &input.overrides)
        .context("resolve questionnaire")?;

    let result = mhguard_domain::evaluate(&resolved.questionnaire);
    tracing::info!(
        laws = result.applicable_laws.len(),
        actions = result.required_actions.len(),
        warnings = result.warnings.len(),
        "assessment complete"
    );

    let ended_at = OffsetDateTime::now_utc();
    let report = build_report(&resolved.questionnaire, result, started_at, ended_at);

    Ok(CheckOutput {
        report,
        unknown_keys: resolved.unknown_keys,
    })
}

/// Map verdict to exit code: 0 = pass, 1 = attention (critical warnings present).
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Attention => 1,
    }
}
