use mhguard_domain::Questionnaire;
use mhguard_types::SCHEMA_QUESTIONNAIRE_V1;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Questionnaire file schema v1.
///
/// Every answer is required. The loader in [`crate::parse_questionnaire`] is
/// more lenient than this model (it reports unknown keys instead of failing);
/// this type is the published contract and the shape written by `mhguard init`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionnaireV1 {
    /// Optional schema string for tooling (`mhguard.questionnaire.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Q1: Does your app collect, share, use, or maintain health information?
    pub collects_health_info: bool,
    /// Q2: Is the information "individually identifiable health information" under HIPAA?
    pub has_identifiable_health_info: bool,
    /// Q3a: Are you a health plan?
    pub is_health_plan: bool,
    /// Q3b: Are you a health care provider?
    pub is_healthcare_provider: bool,
    /// Q4a: Do you develop, offer, or sell certified health information technology?
    pub offers_certified_hit: bool,
    /// Q4b: Do you enable EHI exchange among more than two unaffiliated parties?
    pub enables_ehi_exchange: bool,
    /// Q5: Do consumers need a prescription to access your app?
    pub requires_prescription: bool,
    /// Q6: Do you build or operate the app on behalf of a HIPAA covered entity?
    pub works_for_covered_entity: bool,
    /// Q7: Is the app intended for diagnosis, treatment, or prevention of disease?
    pub intended_for_medical_use: bool,
    /// Q8: Is the app solely for administrative support or healthy lifestyle?
    pub is_administrative_or_lifestyle_only: bool,
    /// Q9: Does the app pose a "low risk" to patients?
    pub is_low_risk: bool,
    /// Q10: Does the app include a device software function under FDA oversight?
    pub has_fda_regulated_function: bool,
    /// Q11: Is the app for use by consumers?
    pub is_consumer_facing: bool,
    /// Q12: Does the app interact with personal health records?
    pub interacts_with_phr: bool,
    /// Q13: Is the app intended for children?
    pub intended_for_children: bool,
    /// Q14: Does the app use child-oriented activities, incentives, or design?
    pub has_child_oriented_features: bool,
    /// Q15: Do you know that children are using the app?
    pub children_using_app: bool,
    /// Q16: Does the app offer substance use disorder treatment?
    pub offers_substance_use_treatment: bool,
}

impl QuestionnaireV1 {
    pub fn from_questionnaire(q: &Questionnaire) -> Self {
        Self {
            schema: Some(SCHEMA_QUESTIONNAIRE_V1.to_string()),
            collects_health_info: q.collects_health_info,
            has_identifiable_health_info: q.has_identifiable_health_info,
            is_health_plan: q.is_health_plan,
            is_healthcare_provider: q.is_healthcare_provider,
            offers_certified_hit: q.offers_certified_hit,
            enables_ehi_exchange: q.enables_ehi_exchange,
            requires_prescription: q.requires_prescription,
            works_for_covered_entity: q.works_for_covered_entity,
            intended_for_medical_use: q.intended_for_medical_use,
            is_administrative_or_lifestyle_only: q.is_administrative_or_lifestyle_only,
            is_low_risk: q.is_low_risk,
            has_fda_regulated_function: q.has_fda_regulated_function,
            is_consumer_facing: q.is_consumer_facing,
            interacts_with_phr: q.interacts_with_phr,
            intended_for_children: q.intended_for_children,
            has_child_oriented_features: q.has_child_oriented_features,
            children_using_app: q.children_using_app,
            offers_substance_use_treatment: q.offers_substance_use_treatment,
        }
    }
}
