//! Pony service — use-cases for the fixture's pony collection.

use corral_domain::error::{CorralError, NotFoundError};
use corral_domain::pony::{Pony, PonyDraft};

use crate::ports::PonyRepository;

/// Application service for pony CRUD operations.
pub struct PonyService<R> {
    repo: R,
}

impl<R: PonyRepository> PonyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a pony by key, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CorralError::NotFound`] when nothing is stored under `key`,
    /// or a storage error from the repository.
    pub async fn get_pony(&self, key: &str) -> Result<Pony, CorralError> {
        self.repo
            .get(key)
            .await?
            .ok_or_else(|| NotFoundError::new(key).into())
    }

    /// List stored ponies.
    ///
    /// With `names`, only ponies whose `name` field is in the list are kept.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_ponies(&self, names: Option<&[String]>) -> Result<Vec<Pony>, CorralError> {
        let ponies = self.repo.get_all().await?;
        Ok(match names {
            Some(names) => ponies
                .into_iter()
                .filter(|pony| names.iter().any(|name| name == pony.name()))
                .collect(),
            None => ponies,
        })
    }

    /// Validate a draft and store it under its own name.
    ///
    /// An existing pony with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CorralError::Validation`] if the draft has no name, or a
    /// storage error from the repository. Nothing is stored on error.
    pub async fn create_pony(&self, draft: PonyDraft) -> Result<Pony, CorralError> {
        let pony = draft.build()?;
        let pony = self.repo.put(pony.name().to_string(), pony).await?;
        tracing::info!(name = pony.name(), "pony created");
        Ok(pony)
    }

    /// Replace the pony stored under `key`.
    ///
    /// The new pony stays under `key` even when its `name` differs, so the
    /// key and the `name` field may drift apart after this call.
    ///
    /// # Errors
    ///
    /// Returns [`CorralError::NotFound`] when nothing is stored under `key`
    /// (checked before the draft is validated, and again when writing),
    /// [`CorralError::Validation`] if the draft has no name, or a storage
    /// error from the repository.
    pub async fn replace_pony(&self, key: &str, draft: PonyDraft) -> Result<Pony, CorralError> {
        self.get_pony(key).await?;
        let pony = draft.build()?;
        let pony = self
            .repo
            .replace(key.to_string(), pony)
            .await?
            .ok_or_else(|| CorralError::from(NotFoundError::new(key)))?;
        tracing::info!(key, name = pony.name(), "pony replaced");
        Ok(pony)
    }

    /// Remove every pony.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn clear(&self) -> Result<(), CorralError> {
        tracing::info!("clearing ponies");
        self.repo.clear().await
    }
}
