//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CorralError`] via `#[from]` or an explicit `From` impl.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CorralError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed. The adapter's own error is kept as the source.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A submitted pony broke a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No `name` field was submitted.
    #[error("A pony must have a name.")]
    MissingName,
    /// A `name` field was submitted with an empty value.
    #[error("A pony must have a name.")]
    EmptyName,
}

/// No pony is stored under the requested key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no pony named {key:?}")]
pub struct NotFoundError {
    pub key: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
