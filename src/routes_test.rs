use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn session_with_role(role: &str) -> Session {
    let payload = serde_json::json!({"sub": "someone", "role": role});
    Session::from_token(format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))).unwrap()
}

const GUARDED: [AppRoute; 4] =
    [AppRoute::Products, AppRoute::NewProduct, AppRoute::Orders, AppRoute::OrderDetail(9)];

// =============================================================
// Paths
// =============================================================

#[test]
fn path_and_parse_agree_for_every_route() {
    for route in [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Products,
        AppRoute::NewProduct,
        AppRoute::Orders,
        AppRoute::OrderDetail(42),
    ] {
        assert_eq!(AppRoute::parse(&route.path()), Some(route));
    }
}

#[test]
fn parse_tolerates_trailing_slash() {
    assert_eq!(AppRoute::parse("/products/"), Some(AppRoute::Products));
}

#[test]
fn parse_rejects_unrouted_paths() {
    assert_eq!(AppRoute::parse("/"), None);
    assert_eq!(AppRoute::parse(""), None);
    assert_eq!(AppRoute::parse("products"), None);
    assert_eq!(AppRoute::parse("/cart"), None);
    assert_eq!(AppRoute::parse("/orders/abc"), None);
    assert_eq!(AppRoute::parse("/orders/1/extra"), None);
}

#[test]
fn unknown_paths_resolve_to_products() {
    assert_eq!(AppRoute::resolve("/"), AppRoute::Products);
    assert_eq!(AppRoute::resolve("/nowhere"), AppRoute::Products);
    assert_eq!(AppRoute::resolve("/orders/3"), AppRoute::OrderDetail(3));
}

// =============================================================
// Guard
// =============================================================

#[test]
fn unauthenticated_guarded_routes_redirect_to_login() {
    for route in GUARDED {
        assert_eq!(guard(route, None), RouteDecision::Redirect(AppRoute::Login), "{route:?}");
    }
}

#[test]
fn unknown_path_without_session_ends_at_login() {
    let route = AppRoute::resolve("/somewhere");
    assert_eq!(guard(route, None), RouteDecision::Redirect(AppRoute::Login));
}

#[test]
fn public_routes_always_render() {
    let admin = session_with_role("admin");
    for route in [AppRoute::Login, AppRoute::Register] {
        assert_eq!(guard(route, None), RouteDecision::Render);
        assert_eq!(guard(route, Some(&admin)), RouteDecision::Render);
    }
}

#[test]
fn any_role_sees_authenticated_routes() {
    for role in ["admin", "user", "customer"] {
        let session = session_with_role(role);
        for route in [AppRoute::Products, AppRoute::Orders, AppRoute::OrderDetail(1)] {
            assert_eq!(guard(route, Some(&session)), RouteDecision::Render);
        }
    }
}

#[test]
fn only_admin_reaches_new_product() {
    assert_eq!(guard(AppRoute::NewProduct, Some(&session_with_role("admin"))), RouteDecision::Render);
    for role in ["user", "customer"] {
        assert_eq!(
            guard(AppRoute::NewProduct, Some(&session_with_role(role))),
            RouteDecision::Redirect(AppRoute::Products)
        );
    }
}
