//! # corral-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **pony REST fixture** (`/ponies/`, `/ponies/{id}`, `/clear`)
//!   that browser test suites call from another origin
//! - Serve **static test assets** (the test page and its scripts) from a
//!   directory on a second listener
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: JSON on success,
//!   plain text on error, permissive CORS headers on everything
//!
//! ## Dependency rule
//! Depends on `corral-app` (for the port trait and service) and
//! `corral-domain` (for types used in request/response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod assets;
pub mod error;
pub mod form;
pub mod response;
pub mod router;
pub mod state;
