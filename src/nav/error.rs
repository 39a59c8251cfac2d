use thiserror::Error;

/// Errors raised by the navigation core.
///
/// Only construction can fail in practice. A toggle on an unknown group is
/// reported through [`NavError::UnknownGroup`] by the checked API and ignored
/// by the unchecked one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown navigation group '{0}'")]
    UnknownGroup(String),

    #[error("navigation group '{0}' is defined more than once")]
    DuplicateGroup(String),

    #[error("navigation group name cannot be empty")]
    EmptyGroupName,
}
