use super::*;

fn token(raw: &str) -> BearerToken {
    BearerToken::new(raw)
}

#[test]
fn order_endpoint_formats_expected_path() {
    assert_eq!(order_endpoint(42), "/orders/42");
}

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status("/products", 200), Ok(()));
    assert_eq!(check_status("/products", 201), Ok(()));
    assert_eq!(
        check_status("/products", 401),
        Err(ApiError::Status { endpoint: "/products".to_owned(), status: 401 })
    );
    assert!(check_status("/orders", 302).is_err());
}

#[test]
fn url_joins_base_and_endpoint() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.url(PRODUCTS_ENDPOINT), "http://localhost:8000/products");
}

#[test]
fn from_config_uses_configured_base_url() {
    let config = ClientConfig::from_raw(Some("https://shop.example.com/"), None);
    assert_eq!(ApiClient::from_config(&config).base_url(), "https://shop.example.com");
}

#[test]
fn anonymous_client_sends_no_authorization() {
    assert_eq!(ApiClient::new("http://x").authorization(), None);
}

#[test]
fn with_bearer_sets_and_clears_authorization() {
    let client = ApiClient::new("http://x");
    let authed = client.with_bearer(Some(token("a.b.c")));
    assert_eq!(authed.authorization().as_deref(), Some("Bearer a.b.c"));
    assert_eq!(authed.base_url(), "http://x");

    let cleared = authed.with_bearer(None);
    assert_eq!(cleared.authorization(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::new("http://x");
    let creds = Credentials { username: "bob".to_owned(), password: "pw".to_owned() };
    futures::executor::block_on(async {
        assert_eq!(client.list_products().await, Err(ApiError::Unavailable));
        assert_eq!(client.list_orders().await, Err(ApiError::Unavailable));
        assert_eq!(client.fetch_order(1).await, Err(ApiError::Unavailable));
        assert_eq!(client.place_order(1).await, Err(ApiError::Unavailable));
        assert_eq!(client.register(&creds).await, Err(ApiError::Unavailable));
        assert_eq!(client.login(&creds).await, Err(ApiError::Unavailable));
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn authorized_calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::new("http://x").with_bearer(Some(token("a.b.c")));
    let result = futures::executor::block_on(client.list_orders());
    assert_eq!(result, Err(ApiError::Unavailable));
}
