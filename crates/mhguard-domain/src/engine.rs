use crate::builder::ResultBuilder;
use crate::checks;
use crate::error::AssessmentError;
use crate::model::Questionnaire;
use crate::report::AssessmentResult;
use std::collections::BTreeMap;
use std::ops::ControlFlow;

/// Evaluate one questionnaire. Deterministic; every answer combination is handled.
pub fn evaluate(q: &Questionnaire) -> AssessmentResult {
    let out = match checks::gate(q, ResultBuilder::new()) {
        ControlFlow::Break(out) => {
            tracing::debug!("no health information collected; skipping rule pipeline");
            return out.finish();
        }
        ControlFlow::Continue(out) => out,
    };

    let result = checks::run_all(q, out).finish();
    tracing::debug!(
        laws = result.applicable_laws.len(),
        actions = result.required_actions.len(),
        warnings = result.warnings.len(),
        "evaluation complete"
    );
    result
}

/// Evaluate a raw key -> answer map. Fails before any rule runs if a required key is absent.
pub fn evaluate_answers(
    answers: &BTreeMap<String, bool>,
) -> Result<AssessmentResult, AssessmentError> {
    let q = Questionnaire::from_answers(answers)?;
    Ok(evaluate(&q))
}
