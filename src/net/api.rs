//! REST client for the storefront gateway.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call resolves to
//! [`ApiError::Unavailable`] since the gateway is only reachable from the
//! browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so failed fetches degrade
//! page behavior without tearing down the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Credentials, NewOrder, NewProduct, Order, Product, TokenResponse};
use crate::config::ClientConfig;
use crate::state::session::{AuthClient, BearerToken};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const PRODUCTS_ENDPOINT: &str = "/products";
pub const ORDERS_ENDPOINT: &str = "/orders";

fn order_endpoint(order_id: u64) -> String {
    format!("{ORDERS_ENDPOINT}/{order_id}")
}

/// Map an HTTP status to success or [`ApiError::Status`].
#[cfg(any(test, feature = "csr"))]
fn check_status(endpoint: &str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { endpoint: endpoint.to_owned(), status })
    }
}

/// Gateway client carrying the base URL and, once logged in, a bearer token.
///
/// Cheap to clone; pages derive an authorized copy per request with
/// [`ApiClient::with_bearer`] so the token always reflects the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    bearer: Option<BearerToken>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), bearer: None }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copy of this client that authenticates with `token`, or anonymously
    /// when `None`.
    #[must_use]
    pub fn with_bearer(&self, token: Option<BearerToken>) -> Self {
        Self { base_url: self.base_url.clone(), bearer: token }
    }

    #[cfg(any(test, feature = "csr"))]
    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    #[cfg(any(test, feature = "csr"))]
    fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token.as_str()))
    }

    /// Create an account via `POST /auth/register` with the server's default role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] when the username is taken (409) or the
    /// body is rejected.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_discard(REGISTER_ENDPOINT, credentials).await
    }

    /// Fetch the catalog via `GET /products`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the gateway responds with a
    /// non-2xx status, or the body is not a product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(PRODUCTS_ENDPOINT).await
    }

    /// Add a catalog entry via `POST /products`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        self.post_discard(PRODUCTS_ENDPOINT, product).await
    }

    /// Fetch the caller's orders via `GET /orders`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the gateway responds with a
    /// non-2xx status, or the body is not an order list.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json(ORDERS_ENDPOINT).await
    }

    /// Fetch a single order via `GET /orders/{order_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 when the order does not exist.
    pub async fn fetch_order(&self, order_id: u64) -> Result<Order, ApiError> {
        self.get_json(&order_endpoint(order_id)).await
    }

    /// Buy one unit of `product_id` via `POST /orders`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn place_order(&self, product_id: u64) -> Result<(), ApiError> {
        self.post_discard(ORDERS_ENDPOINT, &NewOrder::single(product_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.authorize(gloo_net::http::Request::get(&self.url(endpoint)));
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(endpoint, resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(self.unavailable(endpoint))
        }
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = self.send_post(endpoint, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(self.unavailable(endpoint))
        }
    }

    /// POST where the gateway's echo of the created record is not needed.
    async fn post_discard<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.send_post(endpoint, body).await.map(drop)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(self.unavailable(endpoint))
        }
    }

    #[cfg(not(feature = "csr"))]
    fn unavailable(&self, endpoint: &str) -> ApiError {
        log::debug!("{endpoint} skipped outside the browser: authorized={}", self.bearer.is_some());
        ApiError::Unavailable
    }

    #[cfg(feature = "csr")]
    async fn send_post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
        let request = self
            .authorize(gloo_net::http::Request::post(&self.url(endpoint)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(endpoint, resp.status())?;
        Ok(resp)
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

impl AuthClient for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.post_json(LOGIN_ENDPOINT, credentials).await
    }
}
