use anyhow::Context;
use mhguard_domain::{AssessmentResult, Questionnaire};
use mhguard_render::{RenderableAction, RenderableReport, RenderableResource, RenderableVerdict};
use mhguard_types::{AssessmentReport, RunMeta, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Wrap an evaluation result in the versioned report envelope.
pub fn build_report(
    q: &Questionnaire,
    result: AssessmentResult,
    started_at: OffsetDateTime,
    ended_at: OffsetDateTime,
) -> AssessmentReport {
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;
    let verdict = result.verdict();
    let applicable_laws = result.sorted_laws();
    let AssessmentResult {
        recommendations,
        required_actions,
        warnings,
        resources,
        ..
    } = result;

    AssessmentReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "mhguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at,
            duration_ms,
        },
        verdict,
        questionnaire_digest: mhguard_domain::questionnaire_digest(q),
        applicable_laws,
        required_actions,
        recommendations,
        warnings,
        resources,
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<AssessmentReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse mhguard report")
}

pub fn serialize_report(report: &AssessmentReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &AssessmentReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Attention => RenderableVerdict::Attention,
        },
        warnings: report.warnings.clone(),
        applicable_laws: report.applicable_laws.clone(),
        required_actions: report
            .required_actions
            .iter()
            .map(|a| RenderableAction {
                header: a.header.clone(),
                details: a.details.clone(),
            })
            .collect(),
        recommendations: report.recommendations.clone(),
        resources: report
            .resources
            .iter()
            .map(|r| RenderableResource {
                name: r.name.clone(),
                url: r.url.clone(),
            })
            .collect(),
    }
}
