//! In-memory implementation of [`PonyRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use corral_app::ports::PonyRepository;
use corral_domain::error::CorralError;
use corral_domain::pony::Pony;

use crate::error::StoreError;

/// Mutex-guarded map from key to pony.
///
/// Every operation takes the lock for its whole duration, so requests are
/// applied one after the other and a write is visible to the next read.
#[derive(Debug, Default)]
pub struct InMemoryPonyRepository {
    store: Mutex<HashMap<String, Pony>>,
}

impl InMemoryPonyRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Pony>>, StoreError> {
        self.store.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl PonyRepository for InMemoryPonyRepository {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Pony>, CorralError>> + Send {
        let result = self
            .lock()
            .map(|store| store.get(key).cloned())
            .map_err(CorralError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pony>, CorralError>> + Send {
        let result = self
            .lock()
            .map(|store| store.values().cloned().collect())
            .map_err(CorralError::from);
        async { result }
    }

    fn put(&self, key: String, pony: Pony) -> impl Future<Output = Result<Pony, CorralError>> + Send {
        let result = self
            .lock()
            .map(|mut store| {
                store.insert(key, pony.clone());
                pony
            })
            .map_err(CorralError::from);
        async { result }
    }

    fn replace(
        &self,
        key: String,
        pony: Pony,
    ) -> impl Future<Output = Result<Option<Pony>, CorralError>> + Send {
        let result = self
            .lock()
            .map(|mut store| {
                let slot = store.get_mut(&key)?;
                *slot = pony.clone();
                Some(pony)
            })
            .map_err(CorralError::from);
        async { result }
    }

    fn clear(&self) -> impl Future<Output = Result<(), CorralError>> + Send {
        let result = self
            .lock()
            .map(|mut store| store.clear())
            .map_err(CorralError::from);
        async { result }
    }
}
