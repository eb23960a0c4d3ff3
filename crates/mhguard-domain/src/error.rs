use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// A required question was not answered.
    #[error("missing required questionnaire field: {field}")]
    MissingConfigurationField { field: &'static str },
}
