//! Domain model for competition honors.
//!
//! # Responsibility
//! - Define the canonical record rendered by the honors page.
//! - Own per-record validation rules.
//!
//! # Invariants
//! - Every record is identified by a stable, non-empty string id.
//! - A missing milestone flag and an explicit `false` are the same value.

pub mod honor;
