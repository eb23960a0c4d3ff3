use crate::error::AssessmentError;
use mhguard_types::questions::{self, ALL_QUESTIONS};
use std::collections::BTreeMap;

/// Answers to the fixed questionnaire.
///
/// Immutable for the duration of an evaluation: rules only ever see `&Questionnaire`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Questionnaire {
    pub collects_health_info: bool,
    pub has_identifiable_health_info: bool,
    pub is_health_plan: bool,
    pub is_healthcare_provider: bool,
    pub offers_certified_hit: bool,
    pub enables_ehi_exchange: bool,
    pub requires_prescription: bool,
    pub works_for_covered_entity: bool,
    pub intended_for_medical_use: bool,
    pub is_administrative_or_lifestyle_only: bool,
    pub is_low_risk: bool,
    pub has_fda_regulated_function: bool,
    pub is_consumer_facing: bool,
    pub interacts_with_phr: bool,
    pub intended_for_children: bool,
    pub has_child_oriented_features: bool,
    pub children_using_app: bool,
    pub offers_substance_use_treatment: bool,
}

impl Questionnaire {
    /// Build a questionnaire from a key -> answer map.
    ///
    /// Every key in [`ALL_QUESTIONS`] must be present; the first absent key (in
    /// questionnaire order) is reported. Keys outside the registry are ignored.
    pub fn from_answers(answers: &BTreeMap<String, bool>) -> Result<Self, AssessmentError> {
        let mut q = Questionnaire::default();
        for question in ALL_QUESTIONS {
            let value = answers.get(question.key).copied().ok_or(
                AssessmentError::MissingConfigurationField {
                    field: question.key,
                },
            )?;
            q.set(question.key, value);
        }
        Ok(q)
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        let v = match key {
            questions::COLLECTS_HEALTH_INFO => self.collects_health_info,
            questions::HAS_IDENTIFIABLE_HEALTH_INFO => self.has_identifiable_health_info,
            questions::IS_HEALTH_PLAN => self.is_health_plan,
            questions::IS_HEALTHCARE_PROVIDER => self.is_healthcare_provider,
            questions::OFFERS_CERTIFIED_HIT => self.offers_certified_hit,
            questions::ENABLES_EHI_EXCHANGE => self.enables_ehi_exchange,
            questions::REQUIRES_PRESCRIPTION => self.requires_prescription,
            questions::WORKS_FOR_COVERED_ENTITY => self.works_for_covered_entity,
            questions::INTENDED_FOR_MEDICAL_USE => self.intended_for_medical_use,
            questions::IS_ADMINISTRATIVE_OR_LIFESTYLE_ONLY => {
                self.is_administrative_or_lifestyle_only
            }
            questions::IS_LOW_RISK => self.is_low_risk,
            questions::HAS_FDA_REGULATED_FUNCTION => self.has_fda_regulated_function,
            questions::IS_CONSUMER_FACING => self.is_consumer_facing,
            questions::INTERACTS_WITH_PHR => self.interacts_with_phr,
            questions::INTENDED_FOR_CHILDREN => self.intended_for_children,
            questions::HAS_CHILD_ORIENTED_FEATURES => self.has_child_oriented_features,
            questions::CHILDREN_USING_APP => self.children_using_app,
            questions::OFFERS_SUBSTANCE_USE_TREATMENT => self.offers_substance_use_treatment,
            _ => return None,
        };
        Some(v)
    }

    /// Set one answer by key. Returns `false` (and changes nothing) for unknown keys.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        let slot = match key {
            questions::COLLECTS_HEALTH_INFO => &mut self.collects_health_info,
            questions::HAS_IDENTIFIABLE_HEALTH_INFO => &mut self.has_identifiable_health_info,
            questions::IS_HEALTH_PLAN => &mut self.is_health_plan,
            questions::IS_HEALTHCARE_PROVIDER => &mut self.is_healthcare_provider,
            questions::OFFERS_CERTIFIED_HIT => &mut self.offers_certified_hit,
            questions::ENABLES_EHI_EXCHANGE => &mut self.enables_ehi_exchange,
            questions::REQUIRES_PRESCRIPTION => &mut self.requires_prescription,
            questions::WORKS_FOR_COVERED_ENTITY => &mut self.works_for_covered_entity,
            questions::INTENDED_FOR_MEDICAL_USE => &mut self.intended_for_medical_use,
            questions::IS_ADMINISTRATIVE_OR_LIFESTYLE_ONLY => {
                &mut self.is_administrative_or_lifestyle_only
            }
            questions::IS_LOW_RISK => &mut self.is_low_risk,
            questions::HAS_FDA_REGULATED_FUNCTION => &mut self.has_fda_regulated_function,
            questions::IS_CONSUMER_FACING => &mut self.is_consumer_facing,
            questions::INTERACTS_WITH_PHR => &mut self.interacts_with_phr,
            questions::INTENDED_FOR_CHILDREN => &mut self.intended_for_children,
            questions::HAS_CHILD_ORIENTED_FEATURES => &mut self.has_child_oriented_features,
            questions::CHILDREN_USING_APP => &mut self.children_using_app,
            questions::OFFERS_SUBSTANCE_USE_TREATMENT => {
                &mut self.offers_substance_use_treatment
            }
            _ => return false,
        };
        *slot = value;
        true
    }

    /// All answers as `(key, value)` pairs, in questionnaire order.
    pub fn answers(&self) -> Vec<(&'static str, bool)> {
        ALL_QUESTIONS
            .iter()
            .filter_map(|q| self.get(q.key).map(|v| (q.key, v)))
            .collect()
    }

    /// Health plans and health care providers are HIPAA covered entities.
    pub fn is_covered_entity(&self) -> bool {
        self.is_health_plan || self.is_healthcare_provider
    }

    pub fn is_business_associate(&self) -> bool {
        self.works_for_covered_entity
    }

    pub fn has_hipaa_role(&self) -> bool {
        self.is_covered_entity() || self.is_business_associate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map(value: bool) -> BTreeMap<String, bool> {
        ALL_QUESTIONS
            .iter()
            .map(|q| (q.key.to_string(), value))
            .collect()
    }

    #[test]
    fn from_answers_reads_every_key() {
        let q = Questionnaire::from_answers(&full_map(true)).expect("complete");
        assert!(q.answers().iter().all(|(_, v)| *v));
        assert_eq!(q.answers().len(), ALL_QUESTIONS.len());
    }

    #[test]
    fn from_answers_reports_first_missing_key_in_questionnaire_order() {
        let mut map = full_map(false);
        map.remove(questions::INTERACTS_WITH_PHR);
        map.remove(questions::IS_HEALTH_PLAN);

        let err = Questionnaire::from_answers(&map).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::MissingConfigurationField {
                field: questions::IS_HEALTH_PLAN
            }
        );
    }

    #[test]
    fn from_answers_ignores_extra_keys() {
        let mut map = full_map(false);
        map.insert("favorite_color_is_blue".to_string(), true);
        assert_eq!(
            Questionnaire::from_answers(&map).expect("extra keys ignored"),
            Questionnaire::default()
        );
    }

    #[test]
    fn set_unknown_key_is_rejected() {
        let mut q = Questionnaire::default();
        assert!(!q.set("not_a_question", true));
        assert_eq!(q, Questionnaire::default());
        assert_eq!(q.get("not_a_question"), None);
    }

    #[test]
    fn get_and_set_round_trip_each_key() {
        for question in ALL_QUESTIONS {
            let mut q = Questionnaire::default();
            assert!(q.set(question.key, true));
            assert_eq!(q.get(question.key), Some(true));
            assert_eq!(q.answers().iter().filter(|(_, v)| *v).count(), 1);
        }
    }

    #[test]
    fn hipaa_roles() {
        let plan = Questionnaire {
            is_health_plan: true,
            ..Default::default()
        };
        assert!(plan.is_covered_entity());
        assert!(!plan.is_business_associate());

        let associate = Questionnaire {
            works_for_covered_entity: true,
            ..Default::default()
        };
        assert!(!associate.is_covered_entity());
        assert!(associate.has_hipaa_role());

        assert!(!Questionnaire::default().has_hipaa_role());
    }
}
