//! Networking modules for the storefront REST gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and
//! `error` classifies failures.

pub mod api;
pub mod error;
pub mod types;
