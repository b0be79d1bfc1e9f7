//! Network layer: wire types and REST helpers for the auth backend.

pub mod api;
pub mod types;
