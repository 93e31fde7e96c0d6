//! Application services — use-case orchestration.

pub mod pony_service;
