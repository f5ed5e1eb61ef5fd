//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep data shaping and request bookkeeping out of page and
//! component code so it can be tested without a browser.

pub mod request;
pub mod sales;
pub mod stock_form;
