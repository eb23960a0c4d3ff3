use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const EXEMPTION_RECOMMENDATION: &str = "Your app may be exempt from FDA device regulation under Section 520(o) of the 21st Century Cures Act if it's solely for administrative support or healthy lifestyle maintenance.";
pub const LOW_RISK_RECOMMENDATION: &str = "Your app may be considered low-risk by the FDA. FDA does not intend to enforce device requirements for low-risk apps that help patients self-manage or automate simple tasks.";
pub const DEVICE_FUNCTION_ACTION: &str = "Your app contains a device software function that is the focus of FDA's regulatory oversight. You must comply with FDA medical device regulations.";
pub const DEVICE_FUNCTION_WARNING: &str = "FDA REGULATED DEVICE: Your app may require pre-market review, registration, and ongoing compliance. Contact FDA immediately.";
pub const PRESCRIPTION_ACTION: &str =
    "Apps requiring a prescription are likely subject to FDA regulation as medical devices.";

pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    if !q.intended_for_medical_use {
        return out;
    }

    // The 520(o) exemption short-circuits every other FDA branch.
    if q.is_administrative_or_lifestyle_only {
        return out.recommend(EXEMPTION_RECOMMENDATION);
    }

    if q.is_low_risk && !q.has_fda_regulated_function {
        out.recommend(LOW_RISK_RECOMMENDATION)
    } else if q.has_fda_regulated_function {
        out.law(ids::LAW_FDCA)
            .require(DEVICE_FUNCTION_ACTION)
            .warn(DEVICE_FUNCTION_WARNING)
            .link(ids::RESOURCE_FDA_DIGITAL_HEALTH)
            .link(ids::RESOURCE_FDA_POLICY_NAVIGATOR)
    } else if q.requires_prescription {
        out.law(ids::LAW_FDCA).require(PRESCRIPTION_ACTION)
    } else {
        // Medical use with no exemption, risk, device, or prescription answer: nothing to report.
        out
    }
}
