use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const NOTIFICATION_ACTION: &str = "You must provide breach notifications to consumers, the FTC, and in some cases the media, following any unauthorized access to or acquisition of unsecured identifiable health information.";
pub const PENALTY_WARNING: &str = "BREACH NOTIFICATION REQUIRED: Failure to provide required breach notifications can result in significant civil penalties from the FTC.";

/// HIPAA-bound apps are excluded: the rule and the HIPAA breach path never both apply.
pub fn applies(q: &Questionnaire) -> bool {
    q.is_consumer_facing && q.interacts_with_phr && !q.has_hipaa_role()
}

pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    if !applies(q) {
        return out;
    }

    out.law(ids::LAW_HEALTH_BREACH_NOTIFICATION)
        .require(NOTIFICATION_ACTION)
        .warn(PENALTY_WARNING)
        .link(ids::RESOURCE_HEALTH_BREACH_NOTIFICATION)
}
