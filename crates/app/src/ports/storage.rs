//! Storage port — the pony store.

use std::future::Future;

use corral_domain::error::CorralError;
use corral_domain::pony::Pony;

/// Keyed store of [`Pony`]s.
///
/// A key is usually the pony's name, but neither [`PonyRepository::put`] nor
/// [`PonyRepository::replace`] enforces it: replacing a pony keeps the key it
/// was addressed by.
pub trait PonyRepository {
    /// Get the pony stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Pony>, CorralError>> + Send;

    /// Get every stored pony, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pony>, CorralError>> + Send;

    /// Insert or replace the pony stored under `key`.
    fn put(
        &self,
        key: String,
        pony: Pony,
    ) -> impl Future<Output = Result<Pony, CorralError>> + Send;

    /// Replace the pony stored under `key`, only if one is there.
    ///
    /// The presence check and the write happen as one step. Returns `None`,
    /// leaving the store untouched, when nothing is stored under `key`.
    fn replace(
        &self,
        key: String,
        pony: Pony,
    ) -> impl Future<Output = Result<Option<Pony>, CorralError>> + Send;

    /// Remove every stored pony.
    fn clear(&self) -> impl Future<Output = Result<(), CorralError>> + Send;
}
