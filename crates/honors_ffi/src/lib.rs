//! Flutter-facing bindings for the honors core.

pub mod api;
