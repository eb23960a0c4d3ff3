//! Pure compliance evaluation (no IO).
//!
//! Input: a questionnaire constructed elsewhere.
//! Output: applicable laws, required actions, recommendations, warnings, and resources.

#![forbid(unsafe_code)]

pub mod checks;
pub mod error;
pub mod model;
pub mod report;

mod builder;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use builder::ResultBuilder;
pub use engine::{evaluate, evaluate_answers};
pub use error::AssessmentError;
pub use fingerprint::questionnaire_digest;
pub use model::Questionnaire;
pub use report::AssessmentResult;
