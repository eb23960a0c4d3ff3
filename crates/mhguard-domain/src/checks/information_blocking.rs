use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const CERTIFICATION_ACTION: &str = "If you certify health IT through the ASTP/ONC Health IT Certification Program, your technology must meet specific privacy and security requirements and you must make certain public attestations.";

pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    let roles = actor_roles(q);
    if roles.is_empty() {
        return out;
    }

    let out = out.law(ids::LAW_INFORMATION_BLOCKING).require(format!(
        "As a {}, you must comply with Information Blocking regulations. You cannot engage in practices that interfere with access, exchange, or use of Electronic Health Information (EHI) unless covered by a regulatory exception.",
        roles.join(", ")
    ));

    let out = if q.offers_certified_hit {
        out.require(CERTIFICATION_ACTION)
    } else {
        out
    };

    out.link(ids::RESOURCE_INFORMATION_BLOCKING)
}

/// Actor roles in fixed order: provider, certified health IT developer, network/exchange.
pub fn actor_roles(q: &Questionnaire) -> Vec<&'static str> {
    let mut roles = Vec::new();
    if q.is_healthcare_provider {
        roles.push("health care provider");
    }
    if q.offers_certified_hit {
        roles.push("health IT developer of certified health IT");
    }
    if q.enables_ehi_exchange {
        roles.push("health information network/exchange");
    }
    roles
}
