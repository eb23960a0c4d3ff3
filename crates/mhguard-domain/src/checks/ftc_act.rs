use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const SECTION_5_HEADER: &str =
    "Section 5 of the FTC Act applies to most app developers. You must:";
pub const SECTION_5_DETAILS: [&str; 3] = [
    "Have reasonable privacy and security practices",
    "Honor your privacy policy and any promises made to users",
    "Not engage in unfair or deceptive practices regarding data collection, use, or security",
];
pub const ATTESTATION_DETAIL: &str = "Live up to any transparency attestations made through the ONC Health IT Certification Program";

/// Unconditional once the gate has passed.
pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    let out = out
        .law(ids::LAW_FTC_ACT)
        .require_with(SECTION_5_HEADER, &SECTION_5_DETAILS);

    let out = if q.offers_certified_hit {
        out.detail(ATTESTATION_DETAIL)
    } else {
        out
    };

    out.link(ids::RESOURCE_FTC_PRIVACY_SECURITY)
}
