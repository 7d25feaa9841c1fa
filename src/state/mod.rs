//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns identity, `claims` reads token payloads, and `listing`
//! tracks list fetches. None of them depend on Leptos, so they test natively.

pub mod claims;
pub mod listing;
pub mod session;
