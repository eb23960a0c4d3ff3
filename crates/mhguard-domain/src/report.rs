use mhguard_types::{RequiredAction, ResourceLink, Verdict};
use std::collections::BTreeSet;

/// The outcome of one evaluation run.
///
/// Produced once by [`crate::evaluate`] and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssessmentResult {
    pub applicable_laws: BTreeSet<String>,
    /// Insertion order = rule order.
    pub recommendations: Vec<String>,
    pub required_actions: Vec<RequiredAction>,
    pub warnings: Vec<String>,
    /// Registration order; names are unique.
    pub resources: Vec<ResourceLink>,
}

impl AssessmentResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_warnings() {
            Verdict::Attention
        } else {
            Verdict::Pass
        }
    }

    pub fn applies(&self, law: &str) -> bool {
        self.applicable_laws.contains(law)
    }

    /// Law names sorted alphabetically (the set's natural order).
    pub fn sorted_laws(&self) -> Vec<String> {
        self.applicable_laws.iter().cloned().collect()
    }

    pub fn resource_url(&self, name: &str) -> Option<&str> {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.url.as_str())
    }
}
