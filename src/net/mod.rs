//! Networking modules for the inventory backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the injectable HTTP seam used by the auth gateway, `api`
//! holds the dashboard REST helpers, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
