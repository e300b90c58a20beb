//! The storefront's route table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, Route, Router, RouterError, View};

/// Which release of the route table is active
///
/// `Orders` is the later table: identical to `Initial` plus the order-history route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVersion {
    Initial,
    #[default]
    Orders,
}

impl TableVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            TableVersion::Initial => "initial",
            TableVersion::Orders => "orders",
        }
    }
}

impl fmt::Display for TableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableVersion {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(TableVersion::Initial),
            "orders" => Ok(TableVersion::Orders),
            _ => Err(RouterError::UnknownTableVersion(s.to_string())),
        }
    }
}

/// The route table for `version`, in declared order
///
/// # Examples
///
/// ```
/// use storefront_router::{storefront_routes, TableVersion};
///
/// let routes = storefront_routes(TableVersion::Initial).unwrap();
/// assert_eq!(routes.len(), 7);
/// assert_eq!(routes[0].path, "/");
/// ```
pub fn storefront_routes(version: TableVersion) -> Result<Vec<Route>> {
    let mut routes = vec![
        Route::new("/", View::Home)?,
        Route::new("/login", View::Login)?,
        Route::new("/register", View::Register)?,
        Route::new("/product/:id", View::ProductDetail)?.with_name("ProductDetail"),
        Route::new("/products/:id/edit", View::ProductEdit)?.with_name("ProductEdit"),
        Route::new("/products/add", View::AddProduct)?.with_name("AddProduct"),
        Route::new("/cart", View::Cart)?.with_name("Cart"),
    ];

    if version == TableVersion::Orders {
        routes.push(Route::new("/orders", View::Orders)?.with_name("Orders"));
    }

    Ok(routes)
}

/// A router over the storefront table with default matching options
pub fn storefront_router(version: TableVersion) -> Result<Router> {
    Router::from_routes(storefront_routes(version)?)
}
