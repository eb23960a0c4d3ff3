//! The `init` and `questions` use cases.

use mhguard_settings::QuestionnaireFormat;
use mhguard_types::ALL_QUESTIONS;

/// Render a built-in sample as a questionnaire document.
pub fn run_sample(name: &str, format: QuestionnaireFormat) -> anyhow::Result<String> {
    let Some(q) = mhguard_settings::sample(name) else {
        anyhow::bail!(
            "unknown sample: {name} (available: {})",
            mhguard_settings::sample_names().join(", ")
        );
    };
    mhguard_settings::write_questionnaire(&q, format)
}

/// One line per question: number, key, then the wording.
pub fn list_questions() -> String {
    let width = ALL_QUESTIONS
        .iter()
        .map(|q| q.key.len())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for q in ALL_QUESTIONS {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {}\n",
            q.number,
            q.key,
            q.prompt,
            width = width
        ));
    }
    out
}
