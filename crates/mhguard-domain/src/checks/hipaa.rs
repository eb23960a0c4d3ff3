use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const COVERED_ENTITY_ACTION: &str = "As a HIPAA covered entity, you must comply with HIPAA Privacy, Security, and Breach Notification Rules for all Protected Health Information (PHI).";
pub const BUSINESS_ASSOCIATE_ACTION: &str = "As a HIPAA business associate, you must sign a Business Associate Agreement (BAA) and comply with HIPAA Privacy, Security, and Breach Notification Rules.";
pub const NOT_APPLICABLE_RECOMMENDATION: &str = "HIPAA does not apply to your app, but other federal laws (like the FTC Act) still require you to protect consumer health information with reasonable privacy and security practices.";

pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    if !q.has_hipaa_role() {
        if q.has_identifiable_health_info {
            return out.recommend(NOT_APPLICABLE_RECOMMENDATION);
        }
        return out;
    }

    // Covered-entity wording wins when both roles are claimed.
    let action = if q.is_covered_entity() {
        COVERED_ENTITY_ACTION
    } else {
        BUSINESS_ASSOCIATE_ACTION
    };

    out.law(ids::LAW_HIPAA)
        .require(action)
        .link(ids::RESOURCE_HIPAA)
        .link(ids::RESOURCE_HIPAA_MOBILE_APPS)
}
