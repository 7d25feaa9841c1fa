//! Application routes and the session-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares who may see it. The guard turns that requirement and
//! the current session into a render-or-redirect decision, handling each
//! [`Role`] explicitly so admin-only screens are gated here rather than
//! inside the page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::claims::Role;
use crate::state::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Products,
    NewProduct,
    Orders,
    OrderDetail(u64),
}

/// Who may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    CatalogAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(AppRoute),
}

impl AppRoute {
    /// Where unknown paths and `/` land.
    pub const FALLBACK: Self = Self::Products;

    pub fn path(self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Products => "/products".to_owned(),
            Self::NewProduct => "/products/new".to_owned(),
            Self::Orders => "/orders".to_owned(),
            Self::OrderDetail(id) => format!("/orders/{id}"),
        }
    }

    /// Parse an absolute path; `None` for anything unrouted.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.strip_prefix('/')?.split('/');
        let route = match (segments.next(), segments.next()) {
            (Some("login"), None) => Self::Login,
            (Some("register"), None) => Self::Register,
            (Some("products"), None) => Self::Products,
            (Some("products"), Some("new")) => Self::NewProduct,
            (Some("orders"), None) => Self::Orders,
            (Some("orders"), Some(id)) => Self::OrderDetail(id.parse().ok()?),
            _ => return None,
        };
        match segments.next() {
            Some(_) => None,
            None => Some(route),
        }
    }

    /// Resolve a path to the route that should handle it, applying the
    /// fallback for unknown paths.
    pub fn resolve(path: &str) -> Self {
        Self::parse(path).unwrap_or(Self::FALLBACK)
    }

    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Register => Access::Public,
            Self::Products | Self::Orders | Self::OrderDetail(_) => Access::Authenticated,
            Self::NewProduct => Access::CatalogAdmin,
        }
    }
}

/// Decide whether `route` renders for `session` or where to send the user.
pub fn guard(route: AppRoute, session: Option<&Session>) -> RouteDecision {
    match (route.access(), session) {
        (Access::Public, _) => RouteDecision::Render,
        (Access::Authenticated | Access::CatalogAdmin, None) => RouteDecision::Redirect(AppRoute::Login),
        (Access::Authenticated, Some(_)) => RouteDecision::Render,
        (Access::CatalogAdmin, Some(session)) => match session.role() {
            Role::Admin => RouteDecision::Render,
            Role::User | Role::Customer => RouteDecision::Redirect(AppRoute::Products),
        },
    }
}
