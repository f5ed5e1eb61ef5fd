//! Client-side UI state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state lives in `crate::auth`; modules here hold presentation state
//! that pages keep in `RwSignal`s.

pub mod dashboard;
