use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;
use std::ops::ControlFlow;

mod coppa;
mod fda;
mod ftc_act;
mod general_practices;
mod health_breach_notification;
mod hipaa;
mod information_blocking;
mod oarfpa;


/// A single rule: reads the answers and hands back the (possibly extended) builder.
pub type Rule = fn(&Questionnaire, ResultBuilder) -> ResultBuilder;

/// The rule set in evaluation order. Order fixes both precedence and the
/// order of recommendations and required actions in the report.
pub const PIPELINE: [(&str, Rule); 8] = [
    (ids::CHECK_LAW_HIPAA, hipaa::run),
    (ids::CHECK_LAW_FDA, fda::run),
    (ids::CHECK_LAW_INFORMATION_BLOCKING, information_blocking::run),
    (ids::CHECK_LAW_FTC_ACT, ftc_act::run),
    (
        ids::CHECK_LAW_HEALTH_BREACH_NOTIFICATION,
        health_breach_notification::run,
    ),
    (ids::CHECK_LAW_COPPA, coppa::run),
    (ids::CHECK_LAW_OARFPA, oarfpa::run),
    (ids::CHECK_PRACTICE_GENERAL, general_practices::run),
];

pub const NO_HEALTH_INFO_RECOMMENDATION: &str = "Your app may not be subject to health-specific regulations if it doesn't collect health information, but general consumer protection laws may still apply.";

/// The gate in front of the pipeline: apps that collect no health information
/// get a single recommendation and skip every rule.
pub fn gate(q: &Questionnaire, out: ResultBuilder) -> ControlFlow<ResultBuilder, ResultBuilder> {
    if q.collects_health_info {
        ControlFlow::Continue(out)
    } else {
        ControlFlow::Break(out.recommend(NO_HEALTH_INFO_RECOMMENDATION))
    }
}

pub fn run_all(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    PIPELINE.iter().fold(out, |acc, (check_id, rule)| {
        let acc = rule(q, acc);
        tracing::debug!(
            check_id = *check_id,
            laws = acc.current().applicable_laws.len(),
            warnings = acc.current().warnings.len(),
            "rule applied"
        );
        acc
    })
}
