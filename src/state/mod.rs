//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `login`, `ui`) so individual
//! components can depend on small focused models. Each is provided as
//! an `RwSignal` via context from the root component rather than
//! reached as a global.

pub mod auth;
pub mod login;
pub mod ui;
