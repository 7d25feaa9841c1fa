use super::*;

#[test]
fn validate_login_input_trims_username() {
    let creds = validate_login_input("  bob  ", "pw").unwrap();
    assert_eq!(creds.username, "bob");
    assert_eq!(creds.password, "pw");
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("bob", " spaced pw ").unwrap();
    assert_eq!(creds.password, " spaced pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("bob", ""), Err("Enter both username and password."));
}
