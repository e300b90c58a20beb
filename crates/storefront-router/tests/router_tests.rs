//! Integration tests for storefront-router
//!
//! Tests are organized by feature area and cover:
//! - The storefront table (both releases)
//! - Parameter capture and decoding
//! - Named routes and URL generation
//! - Navigation targets
//! - Matching options (case, strict trailing slash, base path)
//! - Table construction errors

use pretty_assertions::assert_eq;
use rstest::rstest;
use storefront_router::*;
use std::collections::HashMap;

fn latest() -> Router {
    storefront_router(TableVersion::Orders).unwrap()
}

fn initial() -> Router {
    storefront_router(TableVersion::Initial).unwrap()
}

// ============================================================================
// Storefront table
// ============================================================================

#[rstest]
#[case("/", View::Home)]
#[case("/login", View::Login)]
#[case("/register", View::Register)]
#[case("/products/add", View::AddProduct)]
#[case("/cart", View::Cart)]
#[case("/orders", View::Orders)]
fn test_static_paths_resolve_without_params(#[case] path: &str, #[case] view: View) {
    let m = latest().match_route(path).unwrap();
    assert_eq!(m.route.view, view);
    assert!(m.params.is_empty());
}

#[test]
fn test_product_detail_captures_id() {
    let m = latest().match_route("/product/42").unwrap();
    assert_eq!(m.route.view, View::ProductDetail);
    assert_eq!(m.route.name.as_deref(), Some("ProductDetail"));
    assert_eq!(m.params, HashMap::from([("id".to_string(), "42".to_string())]));
}

#[test]
fn test_product_edit_captures_id() {
    let m = latest().match_route("/products/42/edit").unwrap();
    assert_eq!(m.route.view, View::ProductEdit);
    assert_eq!(m.params.get("id"), Some(&"42".to_string()));
}

#[test]
fn test_add_product_is_not_a_parameter_route() {
    let m = latest().match_route("/products/add").unwrap();
    assert_eq!(m.route.view, View::AddProduct);
    assert!(m.params.is_empty());
}

#[test]
fn test_navigation_by_name_cart() {
    let router = latest();
    assert_eq!(router.url_for_params("Cart", &[]).unwrap(), "/cart");

    let m = router
        .resolve(&Navigation::named("Cart", &[]))
        .unwrap()
        .unwrap();
    assert_eq!(m.route.path, "/cart");
}

#[test]
fn test_orders_route_only_in_later_table() {
    assert!(latest().route_by_name("Orders").is_some());
    assert!(latest().match_route("/orders").is_some());

    assert!(initial().route_by_name("Orders").is_none());
    assert!(initial().match_route("/orders").is_none());
}

#[rstest]
#[case(TableVersion::Initial, 7)]
#[case(TableVersion::Orders, 8)]
fn test_table_sizes(#[case] version: TableVersion, #[case] expected: usize) {
    assert_eq!(storefront_router(version).unwrap().routes().len(), expected);
}

#[test]
fn test_static_paths_are_unique() {
    let router = latest();
    let mut statics: Vec<&str> = router
        .routes()
        .iter()
        .filter(|r| r.is_static())
        .map(|r| r.path.as_str())
        .collect();
    let total = statics.len();
    statics.sort_unstable();
    statics.dedup();
    assert_eq!(statics.len(), total);
}

#[test]
fn test_declared_order() {
    let paths: Vec<String> = latest().routes().iter().map(|r| r.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/login",
            "/register",
            "/product/:id",
            "/products/:id/edit",
            "/products/add",
            "/cart",
            "/orders",
        ]
    );
}

#[test]
fn test_named_identifiers() {
    let router = latest();
    let mut names: Vec<&str> = router
        .routes()
        .iter()
        .filter_map(|r| r.name.as_deref())
        .collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["AddProduct", "Cart", "Orders", "ProductDetail", "ProductEdit"]
    );
}

#[rstest]
#[case("/checkout")]
#[case("/product")]
#[case("/product/42/reviews")]
#[case("/products/42")]
#[case("/products")]
fn test_unmatched_locations(#[case] location: &str) {
    assert!(latest().match_route(location).is_none());
}

// ============================================================================
// Location handling
// ============================================================================

#[test]
fn test_query_and_fragment_are_split_off() {
    let m = latest().match_route("/product/7?ref=home#reviews").unwrap();
    assert_eq!(m.route.view, View::ProductDetail);
    assert_eq!(m.params.get("id"), Some(&"7".to_string()));
    assert_eq!(m.query.as_deref(), Some("ref=home"));
    assert_eq!(m.fragment.as_deref(), Some("reviews"));
}

#[rstest]
#[case("/cart/")]
#[case("//cart")]
#[case("\\cart")]
fn test_sloppy_paths_are_normalized(#[case] location: &str) {
    assert_eq!(latest().match_route(location).unwrap().route.view, View::Cart);
}

#[test]
fn test_params_are_percent_decoded() {
    let m = latest().match_route("/product/blue%20mug").unwrap();
    assert_eq!(m.params.get("id"), Some(&"blue mug".to_string()));
}

#[test]
fn test_invalid_utf8_param_is_kept_verbatim() {
    let m = latest().match_route("/product/%FF").unwrap();
    assert_eq!(m.params.get("id"), Some(&"%FF".to_string()));
}

// ============================================================================
// Matching options
// ============================================================================

#[test]
fn test_case_sensitive_by_default() {
    assert!(latest().match_route("/Cart").is_none());
}

#[test]
fn test_case_insensitive_option() {
    let router = latest().with_case_insensitive(true);
    assert_eq!(router.match_route("/CART").unwrap().route.view, View::Cart);
    // captured values keep their case
    let m = router.match_route("/PRODUCT/AbC").unwrap();
    assert_eq!(m.params.get("id"), Some(&"AbC".to_string()));
}

#[test]
fn test_strict_trailing_slash() {
    let router = latest().with_strict(true);
    assert!(router.match_route("/cart/").is_none());
    assert!(router.match_route("/cart").is_some());
    assert!(router.match_route("/").is_some());
}

#[test]
fn test_base_path() {
    let router = latest().with_base_path("/shop");

    assert_eq!(router.match_route("/shop").unwrap().route.view, View::Home);
    assert_eq!(router.match_route("/shop/cart").unwrap().route.view, View::Cart);
    assert!(router.match_route("/cart").is_none());
    assert!(router.match_route("/shopping/cart").is_none());

    assert_eq!(router.url_for_params("Cart", &[]).unwrap(), "/shop/cart");
    assert_eq!(
        router.url_for_params("ProductDetail", &[("id", "3")]).unwrap(),
        "/shop/product/3"
    );
}

#[test]
fn test_base_path_follows_case_option() {
    let sensitive = latest().with_base_path("/shop");
    assert!(sensitive.match_route("/SHOP/cart").is_none());

    let insensitive = latest().with_case_insensitive(true).with_base_path("/shop");
    assert_eq!(insensitive.match_route("/SHOP/cart").unwrap().route.view, View::Cart);
    assert_eq!(insensitive.match_route("/Shop").unwrap().route.view, View::Home);
    assert!(insensitive.match_route("/SHOPPING/cart").is_none());
}

// ============================================================================
// URL generation
// ============================================================================

#[test]
fn test_url_for_encodes_values() {
    let url = latest()
        .url_for_params("ProductDetail", &[("id", "a/b c")])
        .unwrap();
    assert_eq!(url, "/product/a%2Fb%20c");

    // and the encoded value round-trips through matching
    let m = latest().match_route(&url).unwrap();
    assert_eq!(m.params.get("id"), Some(&"a/b c".to_string()));
}

#[test]
fn test_url_for_ignores_extra_params() {
    let url = latest()
        .url_for_params("ProductEdit", &[("id", "9"), ("tab", "stock")])
        .unwrap();
    assert_eq!(url, "/products/9/edit");
}

#[test]
fn test_url_for_missing_param() {
    let err = latest().url_for_params("ProductEdit", &[]).unwrap_err();
    assert_eq!(
        err,
        RouterError::MissingParam {
            route: "ProductEdit".to_string(),
            param: "id".to_string(),
        }
    );
}

#[test]
fn test_url_for_empty_param_counts_as_missing() {
    let err = latest()
        .url_for_params("ProductDetail", &[("id", "")])
        .unwrap_err();
    assert!(matches!(err, RouterError::MissingParam { .. }));
}

#[test]
fn test_url_for_unknown_name() {
    let err = latest().url_for_params("Checkout", &[]).unwrap_err();
    assert_eq!(err, RouterError::UnknownRouteName("Checkout".to_string()));
    assert_eq!(err.to_string(), "no route named `Checkout`");
}

#[test]
fn test_orders_name_unknown_in_initial_table() {
    assert_eq!(
        initial().url_for_params("Orders", &[]).unwrap_err(),
        RouterError::UnknownRouteName("Orders".to_string())
    );
}

#[test]
fn test_resolve_named_with_params() {
    let m = latest()
        .resolve(&Navigation::named("ProductEdit", &[("id", "42")]))
        .unwrap()
        .unwrap();
    assert_eq!(m.route.view, View::ProductEdit);
    assert_eq!(m.params.get("id"), Some(&"42".to_string()));
}

#[test]
fn test_resolve_path_miss_is_not_an_error() {
    let resolved = latest().resolve(&Navigation::path("/nowhere")).unwrap();
    assert!(resolved.is_none());
}

// ============================================================================
// Table construction
// ============================================================================

#[test]
fn test_duplicate_static_path_rejected() {
    let err = Router::from_routes([
        Route::new("/cart", View::Cart).unwrap(),
        Route::new("/cart/", View::Orders).unwrap(),
    ])
    .unwrap_err();
    assert_eq!(err, RouterError::DuplicatePath("/cart".to_string()));
}

#[test]
fn test_duplicate_static_path_ignoring_case_rejected() {
    let router = Router::new()
        .with_case_insensitive(true)
        .with_route(Route::new("/cart", View::Cart).unwrap())
        .unwrap();
    let err = router
        .with_route(Route::new("/Cart", View::Orders).unwrap())
        .unwrap_err();
    assert_eq!(err, RouterError::DuplicatePath("/Cart".to_string()));
}

#[test]
fn test_paths_differing_in_case_coexist_when_case_sensitive() {
    let router = Router::from_routes([
        Route::new("/cart", View::Cart).unwrap(),
        Route::new("/Cart", View::Orders).unwrap(),
    ])
    .unwrap();
    assert_eq!(router.match_route("/Cart").unwrap().route.view, View::Orders);
}

#[test]
fn test_duplicate_name_rejected() {
    let err = Router::from_routes([
        Route::new("/cart", View::Cart).unwrap().with_name("Cart"),
        Route::new("/basket", View::Cart).unwrap().with_name("Cart"),
    ])
    .unwrap_err();
    assert_eq!(err, RouterError::DuplicateName("Cart".to_string()));
}

#[test]
fn test_first_declared_route_wins() {
    // Both patterns fit `/products/add`; declared order decides.
    let router = Router::from_routes([
        Route::new("/products/:id", View::ProductDetail).unwrap(),
        Route::new("/products/add", View::AddProduct).unwrap(),
    ])
    .unwrap();

    let m = router.match_route("/products/add").unwrap();
    assert_eq!(m.route.view, View::ProductDetail);
    assert_eq!(m.params.get("id"), Some(&"add".to_string()));
}

#[test]
fn test_invalid_pattern() {
    assert!(matches!(
        Route::new("product/:id", View::ProductDetail),
        Err(RouterError::InvalidPattern { .. })
    ));
}

#[test]
fn test_route_match_serializes() {
    let m = latest().match_route("/product/5").unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["route"]["path"], "/product/:id");
    assert_eq!(json["route"]["view"], "ProductDetail");
    assert_eq!(json["params"]["id"], "5");
    assert!(json["route"].get("pattern").is_none());
}
