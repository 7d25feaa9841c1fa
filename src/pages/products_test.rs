use super::*;

#[test]
fn order_failed_message_names_product_and_cause() {
    let err = ApiError::Status { endpoint: "/orders".to_owned(), status: 500 };
    assert_eq!(order_failed_message(7, &err), "Could not order product 7: /orders returned status 500");
}

#[test]
fn order_failed_message_is_not_the_success_acknowledgement() {
    let message = order_failed_message(1, &ApiError::Network("offline".to_owned()));
    assert_ne!(message, ORDER_PLACED);
    assert!(message.contains("request failed: offline"));
}
