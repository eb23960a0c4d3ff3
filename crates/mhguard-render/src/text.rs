use crate::{NO_LAWS_FALLBACK, RenderableReport};

const WIDTH: usize = 80;

const DISCLAIMER_LINES: [&str; 3] = [
    "DISCLAIMER: This tool provides informational guidance only and does not",
    "constitute legal advice. Consult with qualified legal counsel to ensure",
    "full compliance with all applicable laws and regulations.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextOptions {
    /// Decorate section titles and list items with emoji.
    pub icons: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { icons: true }
    }
}

struct Glyphs {
    warnings: &'static str,
    warning_item: &'static str,
    laws: &'static str,
    law_item: &'static str,
    actions: &'static str,
    recommendations: &'static str,
    resources: &'static str,
}

impl Glyphs {
    fn new(icons: bool) -> Self {
        if icons {
            Self {
                warnings: "⚠️  ",
                warning_item: "⚠️ ",
                laws: "📋 ",
                law_item: "✓",
                actions: "✅ ",
                recommendations: "💡 ",
                resources: "📚 ",
            }
        } else {
            Self {
                warnings: "",
                warning_item: "!",
                laws: "",
                law_item: "-",
                actions: "",
                recommendations: "",
                resources: "",
            }
        }
    }
}

/// Render the console report.
///
/// Section order: warnings (only if any), applicable laws, required actions
/// (only if any), recommendations (only if any), resources, disclaimer.
pub fn render_text(report: &RenderableReport, opts: TextOptions) -> String {
    let g = Glyphs::new(opts.icons);
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str("MOBILE HEALTH APP COMPLIANCE ASSESSMENT REPORT\n");
    out.push_str(&rule);
    out.push_str("\n\n");

    if !report.warnings.is_empty() {
        out.push_str(&format!("{}CRITICAL WARNINGS:\n{}\n", g.warnings, thin));
        for w in &report.warnings {
            out.push_str(&format!("  {} {}\n\n", g.warning_item, w));
        }
    }

    out.push_str(&format!(
        "{}APPLICABLE FEDERAL LAWS & REGULATIONS:\n{}\n",
        g.laws, thin
    ));
    if report.applicable_laws.is_empty() {
        out.push_str(&format!("  {}\n", NO_LAWS_FALLBACK));
    } else {
        for law in &report.applicable_laws {
            out.push_str(&format!("  {} {}\n", g.law_item, law));
        }
    }
    out.push('\n');

    if !report.required_actions.is_empty() {
        out.push_str(&format!("{}REQUIRED COMPLIANCE ACTIONS:\n{}\n", g.actions, thin));
        for action in &report.required_actions {
            out.push_str(&format!("  • {}\n", action.header));
            for detail in &action.details {
                out.push_str(&format!("    • {}\n", detail));
            }
        }
        out.push('\n');
    }

    if !report.recommendations.is_empty() {
        out.push_str(&format!(
            "{}RECOMMENDATIONS & BEST PRACTICES:\n{}\n",
            g.recommendations, thin
        ));
        for rec in &report.recommendations {
            out.push_str(&format!("  • {}\n", rec));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}HELPFUL RESOURCES:\n{}\n", g.resources, thin));
    for r in &report.resources {
        out.push_str(&format!("  • {}\n    {}\n", r.name, r.url));
    }
    out.push('\n');

    out.push_str(&rule);
    out.push('\n');
    for line in DISCLAIMER_LINES {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableAction, RenderableResource, RenderableVerdict};

    fn empty_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Pass,
            warnings: Vec::new(),
            applicable_laws: Vec::new(),
            required_actions: Vec::new(),
            recommendations: vec!["Consider consumer protection law.".to_string()],
            resources: Vec::new(),
        }
    }

    #[test]
    fn empty_report_shows_fallback_and_skips_optional_sections() {
        let text = render_text(&empty_report(), TextOptions::default());
        assert!(text.contains(NO_LAWS_FALLBACK));
        assert!(!text.contains("CRITICAL WARNINGS"));
        assert!(!text.contains("REQUIRED COMPLIANCE ACTIONS"));
        assert!(text.contains("HELPFUL RESOURCES:"));
        assert!(text.contains("DISCLAIMER:"));
    }

    #[test]
    fn warnings_come_first_and_details_are_indented() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Attention,
            warnings: vec!["BAD THING".to_string()],
            applicable_laws: vec!["Law A".to_string(), "Law B".to_string()],
            required_actions: vec![RenderableAction {
                header: "You must:".to_string(),
                details: vec!["step one".to_string()],
            }],
            recommendations: Vec::new(),
            resources: vec![RenderableResource {
                name: "Docs".to_string(),
                url: "https://example.com".to_string(),
            }],
        };

        let text = render_text(&report, TextOptions { icons: false });
        let warn_at = text.find("CRITICAL WARNINGS:").expect("warnings");
        let laws_at = text.find("APPLICABLE FEDERAL LAWS").expect("laws");
        assert!(warn_at < laws_at);
        assert!(text.contains("  ! BAD THING\n"));
        assert!(text.contains("  - Law A\n  - Law B\n"));
        assert!(text.contains("  • You must:\n    • step one\n"));
        assert!(text.contains("  • Docs\n    https://example.com\n"));
        assert!(!text.contains("RECOMMENDATIONS"));
        assert!(!text.contains('✓'));
    }

    #[test]
    fn icons_decorate_titles() {
        let text = render_text(&empty_report(), TextOptions { icons: true });
        assert!(text.contains("📋 APPLICABLE FEDERAL LAWS & REGULATIONS:"));
        assert!(text.contains("💡 RECOMMENDATIONS & BEST PRACTICES:"));
    }
}
