//! Store-specific error type.

use corral_domain::error::CorralError;

/// Errors originating from the in-memory store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    #[error("pony store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for CorralError {
    fn from(err: StoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}
