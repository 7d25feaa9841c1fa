use super::*;

// =============================================================
// Products
// =============================================================

#[test]
fn product_list_deserializes_gateway_payload() {
    let raw = r#"[{"id":1,"name":"SSD","price":129.99},{"id":2,"name":"GPU","price":499}]"#;
    let products: Vec<Product> = serde_json::from_str(raw).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "SSD");
    assert!((products[1].price - 499.0).abs() < f64::EPSILON);
}

#[test]
fn product_without_id_is_rejected() {
    let err = serde_json::from_str::<Vec<Product>>(r#"[{"name":"SSD","price":129.99}]"#).unwrap_err();
    assert!(err.to_string().contains("missing field `id`"));
}

#[test]
fn new_product_serializes_name_and_price() {
    let body = NewProduct { name: "SSD".to_owned(), price: 129.99 };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"name": "SSD", "price": 129.99}));
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(129.99), "$129.99");
    assert_eq!(format_price(5.0), "$5.00");
    assert_eq!(format_price(0.5), "$0.50");
}

// =============================================================
// Orders
// =============================================================

#[test]
fn new_order_single_always_has_quantity_one() {
    for product_id in [0, 1, 42, u64::MAX] {
        let order = NewOrder::single(product_id);
        assert_eq!(order.quantity(), 1);
        assert_eq!(order.product_id(), product_id);
    }
}

#[test]
fn new_order_serializes_to_gateway_body() {
    let json = serde_json::to_value(NewOrder::single(7)).unwrap();
    assert_eq!(json, serde_json::json!({"product_id": 7, "quantity": 1}));
}

#[test]
fn order_deserializes_with_status() {
    let raw = r#"{"id":3,"product_id":7,"quantity":2,"status":"created"}"#;
    let order: Order = serde_json::from_str(raw).unwrap();
    assert_eq!(order.status, "created");
    assert_eq!(order.quantity, 2);
}

#[test]
fn order_summary_formats_line() {
    let order = Order { id: 3, product_id: 7, quantity: 1, status: "created".to_owned() };
    assert_eq!(order_summary(&order), "Order #3 - Product 7 x1 (created)");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn token_response_defaults_token_type() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"a.b.c"}"#).unwrap();
    assert_eq!(resp.access_token, "a.b.c");
    assert_eq!(resp.token_type, "bearer");
}

#[test]
fn token_response_missing_access_token_is_error() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"token_type":"bearer"}"#).is_err());
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { username: "bob".to_owned(), password: "hunter2".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("bob"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn token_response_debug_redacts_token() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"secret.jwt.value"}"#).unwrap();
    assert!(!format!("{resp:?}").contains("secret"));
}
