//! Read-only honor record store.
//!
//! # Responsibility
//! - Hold the canonical competition results list.
//! - Provide read-only views (lookup, milestones, date ordering).
//!
//! # Invariants
//! - The collection is a `static` and is never mutated at runtime.
//! - Helpers never reorder the canonical slice; ordered views are new `Vec`s.

pub mod honors;
pub mod validate;
