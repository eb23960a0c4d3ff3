use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("questionnaire must be a {expected} of answers")]
    NotATable { expected: &'static str },

    #[error("answer for '{field}' must be a boolean, found {found}")]
    InvalidAnswer { field: String, found: &'static str },

    #[error("unsupported questionnaire schema: {found} (expected {expected})")]
    UnsupportedSchema { found: String, expected: &'static str },

    #[error("unknown question key in override: {key}")]
    UnknownOverride { key: String },

    #[error("invalid override '{assignment}' (expected KEY=true|false)")]
    InvalidOverride { assignment: String },

    #[error("unknown questionnaire format: {0} (expected json or toml)")]
    UnknownFormat(String),
}
