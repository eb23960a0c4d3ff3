//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the health-information gate
//! - laws and practices that must always be present
//! - determinism across runs
//! - rule precedence and mutual exclusion

use crate::engine::evaluate;
use crate::model::Questionnaire;
use mhguard_types::{ALL_QUESTIONS, Verdict, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Any combination of the 18 answers.
fn arb_questionnaire() -> impl Strategy<Value = Questionnaire> {
    prop::collection::vec(any::<bool>(), ALL_QUESTIONS.len()).prop_map(|values| {
        let mut q = Questionnaire::default();
        for (question, value) in ALL_QUESTIONS.iter().zip(values) {
            q.set(question.key, value);
        }
        q
    })
}

/// Any combination where health information is collected.
fn arb_collecting() -> impl Strategy<Value = Questionnaire> {
    arb_questionnaire().prop_map(|mut q| {
        q.collects_health_info = true;
        q
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn gate_yields_single_recommendation(mut q in arb_questionnaire()) {
        q.collects_health_info = false;
        let result = evaluate(&q);

        prop_assert_eq!(result.recommendations.len(), 1);
        prop_assert!(result.applicable_laws.is_empty());
        prop_assert!(result.required_actions.is_empty());
        prop_assert!(result.warnings.is_empty());
        prop_assert_eq!(result.verdict(), Verdict::Pass);
    }

    #[test]
    fn ftc_act_and_general_practices_always_present(q in arb_collecting()) {
        let result = evaluate(&q);

        prop_assert!(result.applies(ids::LAW_FTC_ACT));
        prop_assert!(result.recommendations.len() >= 5);
        let tail = &result.recommendations[result.recommendations.len() - 5..];
        prop_assert!(tail[0].starts_with("Implement reasonable data security measures"));
        prop_assert_eq!(tail[4].as_str(), "Implement data retention and deletion policies.");
        prop_assert_eq!(
            result.resources.last().map(|r| r.name.as_str()),
            Some(ids::RESOURCE_FTC_BEST_PRACTICES.0)
        );
    }

    #[test]
    fn evaluation_is_deterministic(q in arb_questionnaire()) {
        prop_assert_eq!(evaluate(&q), evaluate(&q));
    }

    #[test]
    fn breach_rule_never_applies_with_hipaa_role(q in arb_collecting()) {
        let result = evaluate(&q);
        if q.has_hipaa_role() {
            prop_assert!(!result.applies(ids::LAW_HEALTH_BREACH_NOTIFICATION));
            prop_assert!(result.applies(ids::LAW_HIPAA));
        }
    }

    #[test]
    fn lifestyle_exemption_blocks_fdca(mut q in arb_collecting()) {
        q.intended_for_medical_use = true;
        q.is_administrative_or_lifestyle_only = true;
        let result = evaluate(&q);
        prop_assert!(!result.applies(ids::LAW_FDCA));
    }

    #[test]
    fn device_function_without_exemption_adds_fdca_and_warning(mut q in arb_collecting()) {
        q.intended_for_medical_use = true;
        q.is_administrative_or_lifestyle_only = false;
        q.has_fda_regulated_function = true;
        let result = evaluate(&q);
        prop_assert!(result.applies(ids::LAW_FDCA));
        prop_assert_eq!(result.verdict(), Verdict::Attention);
    }

    #[test]
    fn verdict_tracks_warnings(q in arb_questionnaire()) {
        let result = evaluate(&q);
        let expected = if result.warnings.is_empty() { Verdict::Pass } else { Verdict::Attention };
        prop_assert_eq!(result.verdict(), expected);
    }

    #[test]
    fn resource_names_are_unique(q in arb_questionnaire()) {
        let result = evaluate(&q);
        let mut names: Vec<&str> = result.resources.iter().map(|r| r.name.as_str()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), before);
    }
}
