//! # corral-domain
//!
//! Pure domain model for the corral REST test fixture.
//!
//! ## Responsibilities
//! - Define the **Pony**, the fixture's only record: a named bag of string fields
//! - Define the **PonyDraft**, the unvalidated fields submitted by a client
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod pony;
