//! Explain registry for checks and laws.
//!
//! Maps check IDs and law names to human-readable explanations.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Check ID this entry documents.
    pub check_id: &'static str,
    /// Short description of the check.
    pub title: &'static str,
    /// What the law covers and who it reaches.
    pub description: &'static str,
    /// Which answers make the check fire.
    pub triggers: &'static str,
    /// What the check adds to the report when it fires.
    pub obligations: &'static str,
}

/// Look up an explanation by check_id or by the exact law name.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_GATE_HEALTH_INFO => Some(explain_gate()),
        ids::CHECK_LAW_HIPAA | ids::LAW_HIPAA => Some(explain_hipaa()),
        ids::CHECK_LAW_FDA | ids::LAW_FDCA => Some(explain_fda()),
        ids::CHECK_LAW_INFORMATION_BLOCKING | ids::LAW_INFORMATION_BLOCKING => {
            Some(explain_information_blocking())
        }
        ids::CHECK_LAW_FTC_ACT | ids::LAW_FTC_ACT => Some(explain_ftc_act()),
        ids::CHECK_LAW_HEALTH_BREACH_NOTIFICATION | ids::LAW_HEALTH_BREACH_NOTIFICATION => {
            Some(explain_health_breach_notification())
        }
        ids::CHECK_LAW_COPPA | ids::LAW_COPPA => Some(explain_coppa()),
        ids::CHECK_LAW_OARFPA | ids::LAW_OARFPA => Some(explain_oarfpa()),
        ids::CHECK_PRACTICE_GENERAL => Some(explain_general_practices()),
        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_GATE_HEALTH_INFO,
        ids::CHECK_LAW_HIPAA,
        ids::CHECK_LAW_FDA,
        ids::CHECK_LAW_INFORMATION_BLOCKING,
        ids::CHECK_LAW_FTC_ACT,
        ids::CHECK_LAW_HEALTH_BREACH_NOTIFICATION,
        ids::CHECK_LAW_COPPA,
        ids::CHECK_LAW_OARFPA,
        ids::CHECK_PRACTICE_GENERAL,
    ]
}

fn explain_gate() -> Explanation {
    Explanation {
        check_id: ids::CHECK_GATE_HEALTH_INFO,
        title: "Health Information Gate",
        description: "\
Health-specific federal rules only reach apps that collect, share, use, or
maintain health information. Apps that do not are still subject to general
consumer protection law.",
        triggers: "\
Fires when `collects_health_info` is false. No other check runs in that case.",
        obligations: "\
Adds a single recommendation noting that general consumer protection laws may
still apply.",
    }
}

fn explain_hipaa() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_HIPAA,
        title: "HIPAA Rules",
        description: "\
The HIPAA Privacy, Security, and Breach Notification Rules bind covered
entities (health plans and health care providers) directly, and bind their
business associates through a Business Associate Agreement.",
        triggers: "\
- `is_health_plan` or `is_healthcare_provider`: covered entity
- `works_for_covered_entity`: business associate
- Neither, but `has_identifiable_health_info`: HIPAA does not apply; an FTC-level
  reminder is recommended instead",
        obligations: "\
Adds the law, a role-specific required action, and links to the HHS HIPAA and
HIPAA-for-mobile-apps pages.",
    }
}

fn explain_fda() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_FDA,
        title: "FD&C Act (Medical Device Software)",
        description: "\
Software intended for diagnosis, treatment, mitigation, or prevention of
disease can be a medical device under the Federal Food, Drug, and Cosmetic Act.
Section 520(o) of the 21st Century Cures Act exempts software used solely for
administrative support or healthy lifestyle maintenance.",
        triggers: "\
Only evaluated when `intended_for_medical_use` is true, in this order:
1. `is_administrative_or_lifestyle_only`: exemption recommendation, stop
2. `is_low_risk` without `has_fda_regulated_function`: low-risk recommendation
3. `has_fda_regulated_function`: law, required action, warning, FDA links
4. `requires_prescription`: law and required action
Otherwise nothing is reported.",
        obligations: "\
A regulated device function raises a critical warning urging early contact
with the FDA.",
    }
}

fn explain_information_blocking() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_INFORMATION_BLOCKING,
        title: "Information Blocking Regulations",
        description: "\
The 21st Century Cures Act prohibits health care providers, certified health IT
developers, and health information networks/exchanges from practices that
interfere with access, exchange, or use of Electronic Health Information (EHI).",
        triggers: "\
Any of `is_healthcare_provider`, `offers_certified_hit`, `enables_ehi_exchange`.",
        obligations: "\
Adds the law and a required action naming each applicable actor role. Certified
health IT developers also get an attestation requirement.",
    }
}

fn explain_ftc_act() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_FTC_ACT,
        title: "FTC Act Section 5",
        description: "\
Section 5 of the FTC Act prohibits unfair or deceptive acts or practices and
applies to most app developers that handle health information.",
        triggers: "\
Always fires once `collects_health_info` is true.",
        obligations: "\
Requires reasonable privacy and security practices, honoring privacy promises,
and avoiding unfair or deceptive data practices. Certified health IT developers
must also live up to their certification transparency attestations.",
    }
}

fn explain_health_breach_notification() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_HEALTH_BREACH_NOTIFICATION,
        title: "FTC Health Breach Notification Rule",
        description: "\
Vendors of personal health records and related entities that are not covered
by HIPAA must notify consumers, the FTC, and sometimes the media after a breach
of unsecured identifiable health information.",
        triggers: "\
`is_consumer_facing` and `interacts_with_phr`, with none of `is_health_plan`,
`is_healthcare_provider`, `works_for_covered_entity`. HIPAA-bound apps never
trigger this rule.",
        obligations: "\
Adds the law, the breach notification duty, and a critical warning about civil
penalties.",
    }
}

fn explain_coppa() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_COPPA,
        title: "Children's Online Privacy Protection Act",
        description: "\
COPPA governs online collection of personal information from children under 13.",
        triggers: "\
Any of `intended_for_children`, `has_child_oriented_features`,
`children_using_app`.",
        obligations: "\
Requires notice to parents, verifiable parental consent, and reasonable
protection procedures. Raises a critical warning recommending specialized
counsel.",
    }
}

fn explain_oarfpa() -> Explanation {
    Explanation {
        check_id: ids::CHECK_LAW_OARFPA,
        title: "Opioid Addiction Recovery Fraud Prevention Act",
        description: "\
OARFPA lets the FTC seek civil penalties for unfair or deceptive practices
related to substance use disorder treatment services or products.",
        triggers: "\
`offers_substance_use_treatment`.",
        obligations: "\
Adds the law, the civil penalty notice, and a critical warning about efficacy
claims. No reference link is registered for this law.",
    }
}

fn explain_general_practices() -> Explanation {
    Explanation {
        check_id: ids::CHECK_PRACTICE_GENERAL,
        title: "General Best Practices",
        description: "\
Baseline privacy and security practices for every app that handles health
information, drawn from the FTC's guidance for mobile health app developers.",
        triggers: "\
Always runs last once `collects_health_info` is true.",
        obligations: "\
Recommends encryption and access control, a clear privacy policy, meaningful
consent, data minimization, and retention/deletion policies.",
    }
}
