use crate::model::Questionnaire;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 digest for a set of answers.
///
/// Canonical form: `key=true|key=false|...` in questionnaire order.
pub fn questionnaire_digest(q: &Questionnaire) -> String {
    let canonical = q
        .answers()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
