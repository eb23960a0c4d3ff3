//! Stable identifiers for checks, laws, and reference resources.
//!
//! `check_id` is a dotted namespace. Law names are the exact strings that
//! appear in `applicable_laws`.

// Checks (pipeline order)
pub const CHECK_GATE_HEALTH_INFO: &str = "gate.health_info";
pub const CHECK_LAW_HIPAA: &str = "law.hipaa";
pub const CHECK_LAW_FDA: &str = "law.fda";
pub const CHECK_LAW_INFORMATION_BLOCKING: &str = "law.information_blocking";
pub const CHECK_LAW_FTC_ACT: &str = "law.ftc_act";
pub const CHECK_LAW_HEALTH_BREACH_NOTIFICATION: &str = "law.health_breach_notification";
pub const CHECK_LAW_COPPA: &str = "law.coppa";
pub const CHECK_LAW_OARFPA: &str = "law.oarfpa";
pub const CHECK_PRACTICE_GENERAL: &str = "practice.general";

// Laws
pub const LAW_HIPAA: &str = "HIPAA Rules";
pub const LAW_FDCA: &str = "Federal Food, Drug, and Cosmetic Act (FD&C Act)";
pub const LAW_INFORMATION_BLOCKING: &str =
    "21st Century Cures Act - Information Blocking Regulations";
pub const LAW_FTC_ACT: &str = "Federal Trade Commission Act (FTC Act)";
pub const LAW_HEALTH_BREACH_NOTIFICATION: &str = "FTC Health Breach Notification Rule";
pub const LAW_COPPA: &str = "Children's Online Privacy Protection Act (COPPA)";
pub const LAW_OARFPA: &str = "Opioid Addiction Recovery Fraud Prevention Act (OARFPA)";

// Resources: (name, url)
pub const RESOURCE_HIPAA: (&str, &str) = ("HIPAA", "https://www.hhs.gov/hipaa/index.html");
pub const RESOURCE_HIPAA_MOBILE_APPS: (&str, &str) = (
    "HIPAA for Mobile Apps",
    "https://www.hhs.gov/hipaa/for-professionals/special-topics/health-apps/index.html",
);
pub const RESOURCE_FDA_DIGITAL_HEALTH: (&str, &str) = (
    "FDA Digital Health",
    "https://www.fda.gov/medical-devices/digital-health-center-excellence",
);
pub const RESOURCE_FDA_POLICY_NAVIGATOR: (&str, &str) = (
    "FDA Policy Navigator",
    "https://www.fda.gov/medical-devices/digital-health-center-excellence/digital-health-policy-navigator",
);
pub const RESOURCE_INFORMATION_BLOCKING: (&str, &str) = (
    "Information Blocking",
    "https://www.healthit.gov/topic/information-blocking",
);
pub const RESOURCE_FTC_PRIVACY_SECURITY: (&str, &str) = (
    "FTC Privacy & Security",
    "https://www.ftc.gov/business-guidance/privacy-security",
);
pub const RESOURCE_HEALTH_BREACH_NOTIFICATION: (&str, &str) = (
    "Health Breach Notification Rule",
    "https://www.ftc.gov/legal-library/browse/rules/health-breach-notification-rule",
);
pub const RESOURCE_COPPA: (&str, &str) = (
    "COPPA",
    "https://www.ftc.gov/business-guidance/privacy-security/childrens-privacy",
);
pub const RESOURCE_FTC_BEST_PRACTICES: (&str, &str) = (
    "FTC Best Practices for Mobile Health Apps",
    "https://www.ftc.gov/tips-advice/business-center/guidance/mobile-health-app-developers-ftc-best-practices",
);

/// Every law the rule set can report, in pipeline order.
pub fn all_laws() -> &'static [&'static str] {
    &[
        LAW_HIPAA,
        LAW_FDCA,
        LAW_INFORMATION_BLOCKING,
        LAW_FTC_ACT,
        LAW_HEALTH_BREACH_NOTIFICATION,
        LAW_COPPA,
        LAW_OARFPA,
    ]
}
