use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation units the storefront shell can mount
///
/// Views are opaque to the router: it only decides *which* one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    Login,
    Register,
    ProductDetail,
    ProductEdit,
    AddProduct,
    Cart,
    Orders,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Home,
        View::Login,
        View::Register,
        View::ProductDetail,
        View::ProductEdit,
        View::AddProduct,
        View::Cart,
        View::Orders,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Register => "Register",
            View::ProductDetail => "ProductDetail",
            View::ProductEdit => "ProductEdit",
            View::AddProduct => "AddProduct",
            View::Cart => "Cart",
            View::Orders => "Orders",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
