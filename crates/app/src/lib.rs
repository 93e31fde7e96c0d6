//! # corral-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `PonyRepository` port that the store adapter implements
//! - Define the `PonyService` use-cases: fetch, list, create, replace, clear
//! - Orchestrate domain objects without knowing *how* storage or HTTP works
//!
//! ## Dependency rule
//! Depends on `corral-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
