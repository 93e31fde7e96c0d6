//! Shared application state for axum handlers.

use std::sync::Arc;

use corral_app::ports::PonyRepository;
use corral_app::services::pony_service::PonyService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Pony CRUD service.
    pub pony_service: Arc<PonyService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            pony_service: Arc::clone(&self.pony_service),
        }
    }
}

impl<R> AppState<R>
where
    R: PonyRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(pony_service: PonyService<R>) -> Self {
        Self {
            pony_service: Arc::new(pony_service),
        }
    }
}
