use crate::builder::ResultBuilder;
use crate::model::Questionnaire;
use mhguard_types::ids;

pub const BEST_PRACTICES: [&str; 5] = [
    "Implement reasonable data security measures including encryption, access controls, and regular security assessments.",
    "Create a clear, prominent privacy policy that explains what data you collect, how you use it, who you share it with, and how users can access or delete their data.",
    "Obtain meaningful consent from users before collecting or sharing their health information.",
    "Minimize data collection to only what's necessary for your app's functionality.",
    "Implement data retention and deletion policies.",
];

pub fn run(_q: &Questionnaire, out: ResultBuilder) -> ResultBuilder {
    BEST_PRACTICES
        .iter()
        .fold(out, |acc, text| acc.recommend(*text))
        .link(ids::RESOURCE_FTC_BEST_PRACTICES)
}
