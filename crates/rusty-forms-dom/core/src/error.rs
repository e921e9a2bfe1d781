//! Error types

/// Errors surfaced by the validator API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// A validator was registered for a name no control in the form carries
    #[error("FieldNotFound: no field named \"{0}\" in the form")]
    FieldNotFound(String),
}
