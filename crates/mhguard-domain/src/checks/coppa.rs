use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const COPPA_HEADER: &str = "COPPA requires you to:";
pub const COPPA_DETAILS: [&str; 3] = [
    "Provide clear notice to parents about what information you collect from children under 13",
    "Obtain verifiable parental consent before collecting children's personal information",
    "Establish reasonable procedures to protect children's information",
];
pub const CHILDREN_WARNING: &str = "CHILDREN'S DATA: Apps collecting data from children under 13 have strict requirements. Consult with legal counsel familiar with COPPA.";

pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    if !(q.intended_for_children || q.has_child_oriented_features || q.children_using_app) {
        return out;
    }

    out.law(ids::LAW_COPPA)
        .require_with(COPPA_HEADER, &COPPA_DETAILS)
        .warn(CHILDREN_WARNING)
        .link(ids::RESOURCE_COPPA)
}
