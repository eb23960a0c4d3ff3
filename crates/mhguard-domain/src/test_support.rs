use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use crate::report::AssessmentResult;
use mhguard_types::ALL_QUESTIONS;
use std::collections::BTreeMap;

/// A questionnaire with only the given keys answered `true`.
pub fn questionnaire(yes: &[&str]) -> Questionnaire {
    let mut q = Questionnaire::default();
    for key in yes {
        assert!(q.set(key, true), "unknown question key in test: {key}");
    }
    q
}

/// A complete answer map with only the given keys answered `true`.
pub fn answers_map(yes: &[&str]) -> BTreeMap<String, bool> {
    ALL_QUESTIONS
        .iter()
        .map(|q| (q.key.to_string(), yes.contains(&q.key)))
        .collect()
}

/// Run one rule against an empty builder.
pub fn run_rule(
    rule: fn(&Questionnaire, ResultBuilder) -> ResultBuilder,
    q: &Questionnaire,
) -> AssessmentResult {
    rule(q, ResultBuilder::new()).finish()
}
