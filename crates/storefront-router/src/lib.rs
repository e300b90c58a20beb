//! # Storefront Router
//!
//! The client-side route table of the storefront single-page app, plus the
//! small matcher that consumes it:
//! - Static routes (`/cart`)
//! - Named single-segment parameters (`/product/:id`)
//! - Named routes for programmatic navigation (`url_for("Cart", ..)`)
//!
//! ## Matching
//!
//! Routes are tried in declared order and the first one whose shape fits the
//! requested location wins. There is no specificity ranking: the table is
//! written so that its patterns never overlap.
//!
//! ## Path Normalization
//!
//! Locations are cleaned up before matching:
//! - Query and fragment: `/cart?x=1#top` → `/cart`
//! - Trailing slashes: `/cart/` → `/cart` (unless strict)
//! - Double slashes and backslashes: `/products//add` → `/products/add`
//!
//! ## Example
//!
//! ```
//! use storefront_router::{storefront_router, TableVersion, View};
//!
//! let router = storefront_router(TableVersion::Orders).unwrap();
//!
//! let route_match = router.match_route("/product/42").unwrap();
//! assert_eq!(route_match.route.view, View::ProductDetail);
//! assert_eq!(route_match.params.get("id"), Some(&"42".to_string()));
//!
//! assert_eq!(router.url_for_params("Cart", &[]).unwrap(), "/cart");
//! ```

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod path;
pub mod route;
mod table;
mod view;

pub use config::{Config, RoutingConfig, ServerConfig};
pub use error::{Result, RouterError};
pub use path::{is_valid_path, normalize_path, split_location, Location};
pub use route::{parse_pattern, Pattern, Segment};
pub use table::{storefront_router, storefront_routes, TableVersion};
pub use view::View;

// ============================================================================
// Core Types
// ============================================================================

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Canonical pattern text like "/products/:id/edit"
    pub path: String,
    /// Optional name for programmatic navigation
    pub name: Option<String>,
    /// View mounted while this route is active
    pub view: View,
    #[serde(skip)]
    pattern: Pattern,
}

/// Result of matching a location against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Captured path parameters, percent-decoded
    pub params: HashMap<String, String>,
    /// Query string of the requested location, without the `?`
    pub query: Option<String>,
    /// Fragment of the requested location, without the `#`
    pub fragment: Option<String>,
}

/// Where to navigate: a literal location or a named route with parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Path(String),
    Named {
        name: String,
        params: HashMap<String, String>,
    },
}

impl Navigation {
    pub fn path(location: impl Into<String>) -> Self {
        Navigation::Path(location.into())
    }

    /// Named target from `(key, value)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::Navigation;
    ///
    /// let nav = Navigation::named("ProductEdit", &[("id", "7")]);
    /// assert!(matches!(nav, Navigation::Named { .. }));
    /// ```
    pub fn named(name: impl Into<String>, params: &[(&str, &str)]) -> Self {
        Navigation::Named {
            name: name.into(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

// ============================================================================
// Route Implementation
// ============================================================================

impl Route {
    /// Creates a route from pattern text and the view it mounts
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{Route, View};
    ///
    /// let route = Route::new("/product/:id", View::ProductDetail).unwrap();
    /// assert_eq!(route.path, "/product/:id");
    /// assert_eq!(route.params().collect::<Vec<_>>(), vec!["id"]);
    /// ```
    pub fn new(path: &str, view: View) -> Result<Self> {
        let pattern = parse_pattern(path)?;
        Ok(Route {
            path: pattern.to_string(),
            name: None,
            view,
            pattern,
        })
    }

    /// Sets a name for this route (for URL generation and programmatic navigation)
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{Route, View};
    ///
    /// let route = Route::new("/cart", View::Cart).unwrap().with_name("Cart");
    /// assert_eq!(route.name.as_deref(), Some("Cart"));
    /// ```
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Parameter names in order of appearance
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.pattern.params()
    }

    pub fn is_static(&self) -> bool {
        self.pattern.is_static()
    }

    /// Matches this route against a path (case-sensitive)
    ///
    /// The path should already be normalized and stripped of query and fragment;
    /// [`Router::match_route`] does that for full locations.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path, decoding captured parameters
    ///
    /// A capture that does not decode to valid UTF-8 is kept verbatim.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        let components = crate::path::components(path);
        let captures = self.pattern.capture(&components, case_insensitive)?;

        Some(
            captures
                .into_iter()
                .map(|(name, raw)| {
                    let value = urlencoding::decode(raw)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| raw.to_string());
                    (name, value)
                })
                .collect(),
        )
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Values are percent-encoded so they always stay within one segment.
    /// Parameters the pattern does not declare are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{Route, View};
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/products/:id/edit", View::ProductEdit).unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    ///
    /// assert_eq!(route.generate_url(&params).unwrap(), "/products/42/edit");
    /// assert!(route.generate_url(&HashMap::new()).is_err());
    /// ```
    pub fn generate_url(&self, params: &HashMap<String, String>) -> Result<String> {
        let segments = self
            .pattern
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => Ok(text.clone()),
                Segment::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| urlencoding::encode(value).into_owned())
                    .ok_or_else(|| RouterError::MissingParam {
                        route: self.label().to_string(),
                        param: name.clone(),
                    }),
            })
            .collect::<Result<Vec<String>>>()?;

        if segments.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/{}", segments.join("/")))
        }
    }

    /// Name if the route has one, pattern text otherwise
    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.path)
    }
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Ordered, immutable route table plus matching options
///
/// - Regular routes in declared order (first match wins)
/// - Named routes indexed for URL generation
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    named_routes: HashMap<String, usize>,
    case_insensitive: bool,
    strict: bool,
    base_path: String,
}

impl Router {
    /// Creates an empty router with default settings (case-sensitive, non-strict)
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
            case_insensitive: false,
            strict: false,
            base_path: "/".to_string(),
        }
    }

    /// Builds a router from routes in declared order
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{Route, Router, View};
    ///
    /// let router = Router::from_routes([
    ///     Route::new("/", View::Home).unwrap(),
    ///     Route::new("/cart", View::Cart).unwrap().with_name("Cart"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(router.routes().len(), 2);
    /// ```
    pub fn from_routes<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        Self::new().with_routes(routes)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Configures ASCII-case-insensitive matching of static segments
    ///
    /// Set it before adding routes: the duplicate-path check uses the setting
    /// in force when each route is added.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Configures strict trailing-slash handling
    ///
    /// When strict, `/cart/` no longer matches `/cart`.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Mounts the table under a prefix such as `/shop`
    ///
    /// Locations outside the prefix never match; generated URLs carry it.
    pub fn with_base_path(mut self, base_path: impl AsRef<str>) -> Self {
        self.base_path = normalize_path(base_path.as_ref()).into_owned();
        self
    }

    /// Appends a route to the end of the table
    ///
    /// Fails if another static route has the same path, or another route the same name.
    pub fn with_route(mut self, route: Route) -> Result<Self> {
        self.add_route_internal(route)?;
        Ok(self)
    }

    /// Appends multiple routes, keeping their order
    pub fn with_routes<I>(mut self, routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        for route in routes {
            self.add_route_internal(route)?;
        }
        info!(routes = self.routes.len(), named = self.named_routes.len(), "route table built");
        Ok(self)
    }

    fn add_route_internal(&mut self, route: Route) -> Result<()> {
        if route.is_static()
            && self
                .routes
                .iter()
                .any(|existing| {
                    existing.is_static()
                        && existing.pattern.same_shape(&route.pattern, self.case_insensitive)
                })
        {
            return Err(RouterError::DuplicatePath(route.path));
        }

        if let Some(name) = &route.name {
            if self.named_routes.contains_key(name) {
                return Err(RouterError::DuplicateName(name.clone()));
            }
            self.named_routes.insert(name.clone(), self.routes.len());
        }

        self.routes.push(route);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Routes in declared order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Matches a location against all routes and returns the first match
    ///
    /// The location may carry a query string and fragment; both are split off
    /// and kept on the match.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{storefront_router, TableVersion, View};
    ///
    /// let router = storefront_router(TableVersion::Orders).unwrap();
    ///
    /// let m = router.match_route("/products/42/edit?tab=stock").unwrap();
    /// assert_eq!(m.route.view, View::ProductEdit);
    /// assert_eq!(m.params.get("id"), Some(&"42".to_string()));
    /// assert_eq!(m.query.as_deref(), Some("tab=stock"));
    ///
    /// assert!(router.match_route("/checkout").is_none());
    /// ```
    pub fn match_route(&self, location: &str) -> Option<RouteMatch> {
        let location = split_location(location);

        if self.strict && location.path.len() > 1 && location.path.ends_with('/') {
            debug!(path = location.path, "trailing slash rejected in strict mode");
            return None;
        }

        let normalized = normalize_path(location.path);
        let Some(path) = crate::path::strip_base_path_with_options(
            &normalized,
            &self.base_path,
            self.case_insensitive,
        ) else {
            debug!(path = %normalized, base = %self.base_path, "location outside base path");
            return None;
        };

        let found = self.routes.iter().find_map(|route| {
            route
                .matches_with_options(path, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                    query: location.query.map(str::to_string),
                    fragment: location.fragment.map(str::to_string),
                })
        });

        match &found {
            Some(m) => debug!(path, view = %m.route.view, "route matched"),
            None => debug!(path, "no route matched"),
        }
        found
    }

    /// Gets a route by its name
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{storefront_router, TableVersion};
    ///
    /// let router = storefront_router(TableVersion::Orders).unwrap();
    /// assert_eq!(router.route_by_name("Cart").unwrap().path, "/cart");
    /// assert!(router.route_by_name("Checkout").is_none());
    /// ```
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.named_routes.get(name).map(|&index| &self.routes[index])
    }

    /// Generates the URL of a named route, including the base path
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{storefront_router, TableVersion};
    /// use std::collections::HashMap;
    ///
    /// let router = storefront_router(TableVersion::Orders).unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(router.url_for("ProductDetail", &params).unwrap(), "/product/42");
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        let route = self
            .route_by_name(name)
            .ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))?;
        let url = route.generate_url(params)?;

        Ok(match (self.base_path.as_str(), url.as_str()) {
            ("/", _) => url,
            (base, "/") => base.to_string(),
            (base, _) => format!("{}{}", base, url),
        })
    }

    /// Convenience wrapper around [`url_for`](Self::url_for) taking parameter tuples
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{storefront_router, TableVersion};
    ///
    /// let router = storefront_router(TableVersion::Orders).unwrap();
    /// let url = router.url_for_params("ProductEdit", &[("id", "42")]).unwrap();
    /// assert_eq!(url, "/products/42/edit");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let param_map: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }

    /// Resolves a navigation target to the route it would activate
    ///
    /// Named targets go through URL generation first, exactly like a link
    /// rendered from the name, so their errors surface here.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::{storefront_router, Navigation, TableVersion, View};
    ///
    /// let router = storefront_router(TableVersion::Orders).unwrap();
    ///
    /// let m = router.resolve(&Navigation::named("Cart", &[])).unwrap().unwrap();
    /// assert_eq!(m.route.view, View::Cart);
    ///
    /// let m = router.resolve(&Navigation::path("/login")).unwrap().unwrap();
    /// assert_eq!(m.route.view, View::Login);
    /// ```
    pub fn resolve(&self, target: &Navigation) -> Result<Option<RouteMatch>> {
        match target {
            Navigation::Path(location) => Ok(self.match_route(location)),
            Navigation::Named { name, params } => {
                let url = self.url_for(name, params)?;
                Ok(self.match_route(&url))
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
