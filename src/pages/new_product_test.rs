use super::*;

#[test]
fn validate_new_product_trims_name_and_parses_price() {
    let product = validate_new_product("  SSD ", " 129.99 ").unwrap();
    assert_eq!(product.name, "SSD");
    assert!((product.price - 129.99).abs() < f64::EPSILON);
}

#[test]
fn validate_new_product_accepts_leading_dollar_and_zero() {
    assert!((validate_new_product("Sticker", "$0").unwrap().price).abs() < f64::EPSILON);
}

#[test]
fn validate_new_product_requires_name() {
    assert_eq!(validate_new_product("  ", "10"), Err("Enter a product name."));
}

#[test]
fn validate_new_product_rejects_bad_prices() {
    for raw in ["", "abc", "-1", "NaN", "inf"] {
        assert_eq!(validate_new_product("SSD", raw), Err("Enter a valid price."), "{raw}");
    }
}
