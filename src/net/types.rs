//! Wire DTOs for the storefront REST gateway.
//!
//! DESIGN
//! ======
//! Products and orders are server-owned records; the client only reads them
//! and posts the narrower create bodies defined here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog entry as listed by `GET /products`.
///
/// The catalog keys cards and buy actions by `id`, so the gateway must include
/// it in each listed product. A payload without `id` fails to decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Body for `POST /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// A placed order as listed by `GET /orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub status: String,
}

/// Body for `POST /orders`.
///
/// The only constructor is [`NewOrder::single`]: the storefront buys one unit
/// per click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    product_id: u64,
    quantity: u32,
}

impl NewOrder {
    pub fn single(product_id: u64) -> Self {
        Self { product_id, quantity: 1 }
    }

    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Body for `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Render a price the way the catalog shows it, e.g. `$129.99`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One-line order summary used by the orders list.
pub fn order_summary(order: &Order) -> String {
    format!(
        "Order #{} - Product {} x{} ({})",
        order.id, order.product_id, order.quantity, order.status
    )
}
