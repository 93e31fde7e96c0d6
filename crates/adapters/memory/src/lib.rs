//! # corral-adapter-memory
//!
//! Process-local implementation of the `PonyRepository` port.
//!
//! The store lives only as long as the process: there is no persistence,
//! and [`InMemoryPonyRepository`] starts empty every time it is built.
//!
//! ## Dependency rule
//! Depends on `corral-app` (for the port trait) and `corral-domain`
//! (for [`Pony`](corral_domain::pony::Pony)).

pub mod error;
pub mod pony_repo;

pub use pony_repo::InMemoryPonyRepository;
