//! The `explain` use case: look up check and law documentation.

use mhguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and law names.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_laws: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or a law name.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_laws: mhguard_types::ids::all_laws(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("Check: {}\n\n", exp.check_id));
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Triggers\n");
    out.push_str("--------\n");
    out.push_str(exp.triggers);
    out.push_str("\n\n");
    out.push_str("Obligations\n");
    out.push_str("-----------\n");
    out.push_str(exp.obligations);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    laws: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check_id or law: {}\n\n", identifier));
    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable laws:\n");
    for law in laws {
        out.push_str(&format!("  - {}\n", law));
    }

    out
}
