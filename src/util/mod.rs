//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modules here isolate `web-sys` glue from pages and state so the rest of
//! the crate builds and tests without a browser.

pub mod dialog;
pub mod storage;
