use crate::{DISCLAIMER, NO_LAWS_FALLBACK, RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Mobile health app compliance assessment\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Attention => "ATTENTION",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Applicable laws: {}\n- Critical warnings: {}\n\n",
        verdict,
        report.applicable_laws.len(),
        report.warnings.len()
    ));

    if !report.warnings.is_empty() {
        out.push_str("## Critical warnings\n\n");
        for w in &report.warnings {
            out.push_str(&format!("- {}\n", w));
        }
        out.push('\n');
    }

    out.push_str("## Applicable laws\n\n");
    if report.applicable_laws.is_empty() {
        out.push_str(&format!("{}\n\n", NO_LAWS_FALLBACK));
    } else {
        for law in &report.applicable_laws {
            out.push_str(&format!("- {}\n", law));
        }
        out.push('\n');
    }

    if !report.required_actions.is_empty() {
        out.push_str("## Required actions\n\n");
        for action in &report.required_actions {
            out.push_str(&format!("- {}\n", action.header));
            for detail in &action.details {
                out.push_str(&format!("  - {}\n", detail));
            }
        }
        out.push('\n');
    }

    if !report.recommendations.is_empty() {
        out.push_str("## Recommendations\n\n");
        for rec in &report.recommendations {
            out.push_str(&format!("- {}\n", rec));
        }
        out.push('\n');
    }

    if !report.resources.is_empty() {
        out.push_str("## Resources\n\n");
        for r in &report.resources {
            out.push_str(&format!("- [{}]({})\n", r.name, r.url));
        }
        out.push('\n');
    }

    out.push_str(&format!("> {}\n", DISCLAIMER));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableAction, RenderableResource};

    #[test]
    fn renders_gate_only_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            warnings: Vec::new(),
            applicable_laws: Vec::new(),
            required_actions: Vec::new(),
            recommendations: vec!["General consumer protection laws may still apply.".to_string()],
            resources: Vec::new(),
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Mobile health app compliance assessment

        - Verdict: **PASS**
        - Applicable laws: 0
        - Critical warnings: 0

        ## Applicable laws

        No specific health regulations identified, but general consumer protection laws may still apply.

        ## Recommendations

        - General consumer protection laws may still apply.

        > This tool provides informational guidance only and does not constitute legal advice. Consult with qualified legal counsel to ensure full compliance with all applicable laws and regulations.
        ");
    }

    #[test]
    fn renders_warnings_actions_and_links() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Attention,
            warnings: vec!["CHILDREN'S DATA: be careful.".to_string()],
            applicable_laws: vec!["COPPA".to_string()],
            required_actions: vec![RenderableAction {
                header: "COPPA requires you to:".to_string(),
                details: vec!["Obtain consent".to_string()],
            }],
            recommendations: Vec::new(),
            resources: vec![RenderableResource {
                name: "COPPA".to_string(),
                url: "https://example.com/coppa".to_string(),
            }],
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **ATTENTION**"));
        assert!(md.contains("## Critical warnings\n\n- CHILDREN'S DATA: be careful.\n"));
        assert!(md.contains("- COPPA requires you to:\n  - Obtain consent\n"));
        assert!(md.contains("- [COPPA](https://example.com/coppa)"));
        assert!(!md.contains("## Recommendations"));
    }
}
