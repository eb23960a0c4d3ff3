use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const PENALTY_ACTION: &str = "The FTC can seek civil penalties for unfair or deceptive acts or practices related to substance use disorder treatment services or products.";
pub const CLAIMS_WARNING: &str = "SUBSTANCE USE TREATMENT: Enhanced scrutiny applies. Ensure all claims about treatment efficacy are truthful and not misleading.";

// No reference link for OARFPA.
pub fn run(q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    if !q.offers_substance_use_treatment {
        return out;
    }

    out.law(ids::LAW_OARFPA)
        .require(PENALTY_ACTION)
        .warn(CLAIMS_WARNING)
}
