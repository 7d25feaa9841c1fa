//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session signal as a prop rather than reading it
//! from context, so every consumer of identity is visible at the call site.

pub mod nav_bar;
pub mod product_card;
pub mod route_guard;
