use mhguard_domain::Questionnaire;

/// Sample questionnaires are starting points for `mhguard init`.
///
/// Keep these small and readable; each one exercises a different part of the rule set.
pub fn sample(name: &str) -> Option<Questionnaire> {
    match name {
        "consumer-tracker" => Some(consumer_tracker()),
        "provider-portal" => Some(provider_portal()),
        "kids-symptom-checker" => Some(kids_symptom_checker()),
        "blank" => Some(Questionnaire::default()),
        _ => None,
    }
}

pub fn sample_names() -> &'static [&'static str] {
    &[
        "consumer-tracker",
        "provider-portal",
        "kids-symptom-checker",
        "blank",
    ]
}

/// Consumer wellness tracker that syncs with personal health records.
fn consumer_tracker() -> Questionnaire {
    Questionnaire {
        collects_health_info: true,
        has_identifiable_health_info: true,
        is_administrative_or_lifestyle_only: true,
        is_low_risk: true,
        is_consumer_facing: true,
        interacts_with_phr: true,
        ..Questionnaire::default()
    }
}

/// Patient portal run by a provider that also ships certified health IT.
fn provider_portal() -> Questionnaire {
    Questionnaire {
        collects_health_info: true,
        has_identifiable_health_info: true,
        is_healthcare_provider: true,
        offers_certified_hit: true,
        enables_ehi_exchange: true,
        is_consumer_facing: true,
        interacts_with_phr: true,
        ..Questionnaire::default()
    }
}

/// Diagnostic app for children with an FDA-regulated function.
fn kids_symptom_checker() -> Questionnaire {
    Questionnaire {
        collects_health_info: true,
        has_identifiable_health_info: true,
        intended_for_medical_use: true,
        has_fda_regulated_function: true,
        is_consumer_facing: true,
        intended_for_children: true,
        has_child_oriented_features: true,
        ..Questionnaire::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_sample_resolves() {
        for name in sample_names() {
            assert!(sample(name).is_some(), "missing sample {name}");
        }
        assert!(sample("nope").is_none());
    }

    #[test]
    fn blank_sample_collects_nothing() {
        assert!(!sample("blank").expect("blank").collects_health_info);
    }
}
