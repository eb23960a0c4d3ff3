//! Question keys and the questionnaire wording they answer.
//!
//! Keys are the stable field names of a questionnaire file. The registry is
//! kept in questionnaire order; loaders report the first missing key in this
//! order.

pub const COLLECTS_HEALTH_INFO: &str = "collects_health_info";
pub const HAS_IDENTIFIABLE_HEALTH_INFO: &str = "has_identifiable_health_info";
pub const IS_HEALTH_PLAN: &str = "is_health_plan";
pub const IS_HEALTHCARE_PROVIDER: &str = "is_healthcare_provider";
pub const OFFERS_CERTIFIED_HIT: &str = "offers_certified_hit";
pub const ENABLES_EHI_EXCHANGE: &str = "enables_ehi_exchange";
pub const REQUIRES_PRESCRIPTION: &str = "requires_prescription";
pub const WORKS_FOR_COVERED_ENTITY: &str = "works_for_covered_entity";
pub const INTENDED_FOR_MEDICAL_USE: &str = "intended_for_medical_use";
pub const IS_ADMINISTRATIVE_OR_LIFESTYLE_ONLY: &str = "is_administrative_or_lifestyle_only";
pub const IS_LOW_RISK: &str = "is_low_risk";
pub const HAS_FDA_REGULATED_FUNCTION: &str = "has_fda_regulated_function";
pub const IS_CONSUMER_FACING: &str = "is_consumer_facing";
pub const INTERACTS_WITH_PHR: &str = "interacts_with_phr";
pub const INTENDED_FOR_CHILDREN: &str = "intended_for_children";
pub const HAS_CHILD_ORIENTED_FEATURES: &str = "has_child_oriented_features";
pub const CHILDREN_USING_APP: &str = "children_using_app";
pub const OFFERS_SUBSTANCE_USE_TREATMENT: &str = "offers_substance_use_treatment";

/// One yes/no question of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Field name in a questionnaire file.
    pub key: &'static str,
    /// Questionnaire numbering (`"3a"`, `"12"`, ...).
    pub number: &'static str,
    pub prompt: &'static str,
}

pub const ALL_QUESTIONS: &[Question] = &[
    Question {
        key: COLLECTS_HEALTH_INFO,
        number: "1",
        prompt: "Does your app collect, share, use, or maintain health information?",
    },
    Question {
        key: HAS_IDENTIFIABLE_HEALTH_INFO,
        number: "2",
        prompt: "Does the information fall within HIPAA's definition of \"individually identifiable health information\"?",
    },
    Question {
        key: IS_HEALTH_PLAN,
        number: "3a",
        prompt: "Are you a health plan?",
    },
    Question {
        key: IS_HEALTHCARE_PROVIDER,
        number: "3b",
        prompt: "Are you a health care provider (doctor, dentist, psychologist, hospital, clinic, pharmacy)?",
    },
    Question {
        key: OFFERS_CERTIFIED_HIT,
        number: "4a",
        prompt: "Do you develop, offer, or sell any certified health information technology?",
    },
    Question {
        key: ENABLES_EHI_EXCHANGE,
        number: "4b",
        prompt: "Do you enable electronic health information exchange among more than two unaffiliated parties?",
    },
    Question {
        key: REQUIRES_PRESCRIPTION,
        number: "5",
        prompt: "Do consumers need a prescription to access your app?",
    },
    Question {
        key: WORKS_FOR_COVERED_ENTITY,
        number: "6",
        prompt: "Are you developing, offering, or operating an app on behalf of a HIPAA covered entity, or subcontracting to an entity that serves one?",
    },
    Question {
        key: INTENDED_FOR_MEDICAL_USE,
        number: "7",
        prompt: "Is your app intended for diagnosis, cure, mitigation, treatment, or prevention of disease, or to affect the structure or function of the body?",
    },
    Question {
        key: IS_ADMINISTRATIVE_OR_LIFESTYLE_ONLY,
        number: "8",
        prompt: "Is your app solely for administrative support, healthy lifestyle, electronic patient records, data transfer/storage/display, or limited clinical decision support?",
    },
    Question {
        key: IS_LOW_RISK,
        number: "9",
        prompt: "Does your app pose a \"low risk\" to patients (self-management without specific treatment suggestions, or automating simple tasks)?",
    },
    Question {
        key: HAS_FDA_REGULATED_FUNCTION,
        number: "10",
        prompt: "Does your app include a device software function that is the focus of FDA's oversight?",
    },
    Question {
        key: IS_CONSUMER_FACING,
        number: "11",
        prompt: "Is your app for use by consumers?",
    },
    Question {
        key: INTERACTS_WITH_PHR,
        number: "12",
        prompt: "Does your app collect or maintain identifiable health information for consumers, or access, send to, or serve personal health records?",
    },
    Question {
        key: INTENDED_FOR_CHILDREN,
        number: "13",
        prompt: "Is your app intended for children?",
    },
    Question {
        key: HAS_CHILD_ORIENTED_FEATURES,
        number: "14",
        prompt: "Does your app use child-oriented activities, incentives, design, music, or similar features?",
    },
    Question {
        key: CHILDREN_USING_APP,
        number: "15",
        prompt: "Do you have actual knowledge that children are using your app?",
    },
    Question {
        key: OFFERS_SUBSTANCE_USE_TREATMENT,
        number: "16",
        prompt: "Does your app offer a substance use disorder treatment service or product?",
    },
];

pub fn lookup_question(key: &str) -> Option<&'static Question> {
    ALL_QUESTIONS.iter().find(|q| q.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn registry_has_eighteen_unique_keys() {
        let keys: BTreeSet<&str> = ALL_QUESTIONS.iter().map(|q| q.key).collect();
        assert_eq!(keys.len(), 18);
        assert_eq!(ALL_QUESTIONS.len(), 18);
    }

    #[test]
    fn gate_question_comes_first() {
        assert_eq!(ALL_QUESTIONS[0].key, COLLECTS_HEALTH_INFO);
    }

    #[test]
    fn lookup_unknown_key_is_none() {
        assert!(lookup_question("is_health_plan").is_some());
        assert!(lookup_question("is_a_teapot").is_none());
    }
}
