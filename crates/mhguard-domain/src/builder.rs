use crate::report::AssessmentResult;
use mhguard_types::{RequiredAction, ResourceLink};

/// Accumulates the output of the rule pipeline.
///
/// Each rule takes the builder by value and hands it back, so a rule can be
/// run in isolation against a fresh builder.
#[derive(Clone, Debug, Default)]
pub struct ResultBuilder {
    result: AssessmentResult,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a law that is already present is a no-op.
    pub fn law(mut self, name: &str) -> Self {
        self.result.applicable_laws.insert(name.to_string());
        self
    }

    pub fn recommend(mut self, text: impl Into<String>) -> Self {
        self.result.recommendations.push(text.into());
        self
    }

    pub fn require(mut self, header: impl Into<String>) -> Self {
        self.result.required_actions.push(RequiredAction::new(header));
        self
    }

    pub fn require_with(mut self, header: impl Into<String>, details: &[&str]) -> Self {
        self.result.required_actions.push(RequiredAction {
            header: header.into(),
            details: details.iter().map(|d| d.to_string()).collect(),
        });
        self
    }

    /// Append a detail to the most recent required action.
    ///
    /// With no action yet, the detail becomes an action of its own.
    pub fn detail(mut self, text: impl Into<String>) -> Self {
        match self.result.required_actions.last_mut() {
            Some(action) => action.details.push(text.into()),
            None => self.result.required_actions.push(RequiredAction::new(text)),
        }
        self
    }

    pub fn warn(mut self, text: impl Into<String>) -> Self {
        self.result.warnings.push(text.into());
        self
    }

    /// Register a reference link. A name seen before keeps its position and takes the new URL.
    pub fn link(mut self, (name, url): (&str, &str)) -> Self {
        match self.result.resources.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.url = url.to_string(),
            None => self.result.resources.push(ResourceLink {
                name: name.to_string(),
                url: url.to_string(),
            }),
        }
        self
    }

    /// Read access for rules and logging.
    pub fn current(&self) -> &AssessmentResult {
        &self.result
    }

    pub fn finish(self) -> AssessmentResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_law_is_a_no_op() {
        let result = ResultBuilder::new().law("A").law("B").law("A").finish();
        assert_eq!(result.applicable_laws.len(), 2);
    }

    #[test]
    fn link_upserts_in_place() {
        let result = ResultBuilder::new()
            .link(("first", "https://one.example"))
            .link(("second", "https://two.example"))
            .link(("first", "https://three.example"))
            .finish();

        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.resources[0].name, "first");
        assert_eq!(result.resources[0].url, "https://three.example");
        assert_eq!(result.resources[1].name, "second");
    }

    #[test]
    fn detail_attaches_to_latest_action() {
        let result = ResultBuilder::new()
            .require("one")
            .require_with("two", &["a"])
            .detail("b")
            .finish();

        assert!(result.required_actions[0].details.is_empty());
        assert_eq!(result.required_actions[1].details, vec!["a", "b"]);
    }

    #[test]
    fn detail_without_action_becomes_header() {
        let result = ResultBuilder::new().detail("orphan").finish();
        assert_eq!(result.required_actions.len(), 1);
        assert_eq!(result.required_actions[0].header, "orphan");
    }
}
