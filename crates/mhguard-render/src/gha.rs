use crate::RenderableReport;

/// Render the assessment as GitHub Actions workflow command annotations.
///
/// Critical warnings become `::warning::` lines; each applicable law is a `::notice::`.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let warnings = report
        .warnings
        .iter()
        .map(|w| format!("::warning title=mhguard::{}", escape(w)));
    let laws = report
        .applicable_laws
        .iter()
        .map(|law| format!("::notice title=mhguard::Applicable law: {}", escape(law)));

    warnings.chain(laws).collect()
}

fn escape(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableVerdict;

    #[test]
    fn warnings_precede_law_notices() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Attention,
            warnings: vec!["100% bad\nreally".to_string()],
            applicable_laws: vec!["COPPA".to_string()],
            required_actions: Vec::new(),
            recommendations: Vec::new(),
            resources: Vec::new(),
        };

        let lines = render_github_annotations(&report);
        assert_eq!(
            lines,
            vec![
                "::warning title=mhguard::100%25 bad%0Areally".to_string(),
                "::notice title=mhguard::Applicable law: COPPA".to_string(),
            ]
        );
    }

    #[test]
    fn empty_report_has_no_annotations() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            warnings: Vec::new(),
            applicable_laws: Vec::new(),
            required_actions: Vec::new(),
            recommendations: vec!["anything".to_string()],
            resources: Vec::new(),
        };
        assert!(render_github_annotations(&report).is_empty());
    }
}
