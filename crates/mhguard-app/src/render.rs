//! Render use cases: text, Markdown, and GitHub annotations from in-memory reports.

use mhguard_render::{RenderableReport, TextOptions};

pub fn render_text(report: &RenderableReport, icons: bool) -> String {
    mhguard_render::render_text(report, TextOptions { icons })
}

pub fn render_markdown(report: &RenderableReport) -> String {
    mhguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    mhguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhguard_render::RenderableVerdict;

    fn sample_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Attention,
            warnings: vec!["one".to_string(), "two".to_string()],
            applicable_laws: vec!["COPPA".to_string()],
            required_actions: Vec::new(),
            recommendations: Vec::new(),
            resources: Vec::new(),
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        assert_eq!(render_annotations(&report, 1).len(), 1);
        assert_eq!(render_annotations(&report, 10).len(), 3);
    }

    #[test]
    fn render_text_honors_icon_flag() {
        let report = sample_report();
        assert!(render_text(&report, true).contains('✓'));
        assert!(!render_text(&report, false).contains('✓'));
    }

    #[test]
    fn render_markdown_smoke() {
        assert!(render_markdown(&sample_report()).contains("## Critical warnings"));
    }
}
