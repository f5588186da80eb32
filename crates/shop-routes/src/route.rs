//! Route table and path resolution.

use std::collections::HashMap;

use crate::{RouteError, View};

/// Extracted route parameters (e.g., `id` from `/products/:id`).
pub type RouteParams = HashMap<String, String>;

/// Static description of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// The storefront's routes, in match order.
pub const STOREFRONT_ROUTES: &[RouteMeta] = &[
    RouteMeta {
        path: "/",
        name: "home",
        view: View::Home,
    },
    RouteMeta {
        path: "/products",
        name: "products",
        view: View::ProductListing,
    },
    RouteMeta {
        path: "/products/:id",
        name: "product-detail",
        view: View::ProductDetail,
    },
    RouteMeta {
        path: "/cart",
        name: "cart",
        view: View::Cart,
    },
    RouteMeta {
        path: "/checkout",
        name: "checkout",
        view: View::Checkout,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

fn parse_pattern(path: &str) -> Vec<Segment> {
    split_path(path)
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(s.to_string()),
        })
        .collect()
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    path: String,
    name: String,
    view: View,
    props: bool,
    segments: Vec<Segment>,
}

impl RouteEntry {
    /// Build an entry from a path pattern such as `/products/:id`.
    ///
    /// Routes with parameters pass them to their view as props.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        let path = path.into();
        let segments = parse_pattern(&path);
        let props = segments.iter().any(|s| matches!(s, Segment::Param(_)));
        Self {
            path,
            name: name.into(),
            view,
            props,
            segments,
        }
    }

    /// The path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Whether path parameters are passed to the view.
    pub fn props(&self) -> bool {
        self.props
    }

    /// Names of the `:param` segments, in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    let value = urlencoding::decode(part).ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }

    fn build_href(&self, params: &RouteParams) -> Result<String, RouteError> {
        let mut href = String::new();
        for segment in &self.segments {
            href.push('/');
            match segment {
                Segment::Static(s) => href.push_str(s),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name.clone(),
                            param: name.clone(),
                        })?;
                    href.push_str(&urlencoding::encode(value));
                }
            }
        }
        if href.is_empty() {
            href.push('/');
        }
        Ok(href)
    }
}

impl From<&RouteMeta> for RouteEntry {
    fn from(meta: &RouteMeta) -> Self {
        RouteEntry::new(meta.path, meta.name, meta.view)
    }
}

/// A resolved path: the route it hit and the parameters it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteEntry,
    pub params: RouteParams,
}

impl RouteMatch<'_> {
    pub fn view(&self) -> View {
        self.route.view()
    }

    /// A parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table. The first matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteEntry>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        view: View,
    ) -> &mut Self {
        let entry = RouteEntry::new(path, name, view);
        tracing::debug!(path = %entry.path, name = %entry.name, view = %entry.view, "route registered");
        self.routes.push(entry);
        self
    }

    /// Registered routes, in match order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Match a URL path against the table.
    ///
    /// Any query string or fragment is ignored, as are empty segments, so
    /// `/cart/` and `/cart?ref=nav` both resolve to the cart. Static segments
    /// compare case-sensitively; parameter values are percent-decoded.
    pub fn resolve(&self, url: &str) -> Result<RouteMatch<'_>, RouteError> {
        let path = url.split(['?', '#']).next().unwrap_or_default();

        self.routes
            .iter()
            .find_map(|route| {
                route
                    .match_path(path)
                    .map(|params| RouteMatch { route, params })
            })
            .ok_or_else(|| {
                tracing::debug!(url, "no route matched");
                RouteError::NotFound(path.to_string())
            })
    }

    /// Build the URL of a named route. Parameter values are percent-encoded.
    pub fn href(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        self.by_name(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .build_href(params)
    }
}

impl FromIterator<RouteEntry> for RouteRegistry {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

/// The storefront route table.
pub fn storefront_routes() -> RouteRegistry {
    STOREFRONT_ROUTES.iter().map(RouteEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_storefront_table() {
        let routes = storefront_routes();
        let table: Vec<_> = routes
            .routes()
            .iter()
            .map(|r| (r.path(), r.view()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("/", View::Home),
                ("/products", View::ProductListing),
                ("/products/:id", View::ProductDetail),
                ("/cart", View::Cart),
                ("/checkout", View::Checkout),
            ]
        );
    }

    #[test]
    fn test_only_detail_route_takes_props() {
        let routes = storefront_routes();
        let with_props: Vec<_> = routes
            .routes()
            .iter()
            .filter(|r| r.props())
            .map(|r| r.name())
            .collect();
        assert_eq!(with_props, vec!["product-detail"]);
        assert_eq!(
            routes.by_name("product-detail").unwrap().param_names(),
            vec!["id"]
        );
    }

    #[test]
    fn test_route_names_match_views() {
        for route in storefront_routes().routes() {
            assert_eq!(route.name(), route.view().route_name());
        }
    }

    #[test]
    fn test_resolve_root() {
        let routes = storefront_routes();
        assert_eq!(routes.resolve("/").unwrap().view(), View::Home);
        assert_eq!(routes.resolve("").unwrap().view(), View::Home);
    }

    #[test]
    fn test_resolve_static_routes() {
        let routes = storefront_routes();
        assert_eq!(routes.resolve("/products").unwrap().view(), View::ProductListing);
        assert_eq!(routes.resolve("/cart/").unwrap().view(), View::Cart);
        assert_eq!(
            routes.resolve("/checkout?step=2#pay").unwrap().view(),
            View::Checkout
        );
    }

    #[test]
    fn test_resolve_product_detail_param() {
        let routes = storefront_routes();
        let matched = routes.resolve("/products/3").unwrap();
        assert_eq!(matched.view(), View::ProductDetail);
        assert_eq!(matched.param("id"), Some("3"));
        assert!(matched.route.props());
    }

    #[test]
    fn test_resolve_not_found() {
        let routes = storefront_routes();
        assert_eq!(
            routes.resolve("/products/3/reviews"),
            Err(RouteError::NotFound("/products/3/reviews".to_string()))
        );
        assert!(routes.resolve("/Cart").is_err());
        assert!(routes.resolve("/wishlist").is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let mut routes = RouteRegistry::new();
        routes
            .register("/products/featured", "featured", View::ProductListing)
            .register("/products/:id", "product-detail", View::ProductDetail);

        assert_eq!(
            routes.resolve("/products/featured").unwrap().route.name(),
            "featured"
        );
        assert_eq!(
            routes.resolve("/products/7").unwrap().route.name(),
            "product-detail"
        );
    }

    #[test]
    fn test_href() {
        let routes = storefront_routes();
        assert_eq!(routes.href("home", &RouteParams::new()).unwrap(), "/");
        assert_eq!(routes.href("cart", &RouteParams::new()).unwrap(), "/cart");
        assert_eq!(
            routes
                .href("product-detail", &params(&[("id", "5")]))
                .unwrap(),
            "/products/5"
        );
    }

    #[test]
    fn test_href_encodes_reserved_characters() {
        let routes = storefront_routes();
        assert_eq!(
            routes.href("product-detail", &params(&[("id", "a/b")])).unwrap(),
            "/products/a%2Fb"
        );
        assert_eq!(
            routes.href("product-detail", &params(&[("id", "x?y#z")])).unwrap(),
            "/products/x%3Fy%23z"
        );
    }

    #[test]
    fn test_resolve_decodes_params() {
        let routes = storefront_routes();
        let matched = routes.resolve("/products/50%25%20off").unwrap();
        assert_eq!(matched.param("id"), Some("50% off"));
    }

    #[test]
    fn test_resolve_rejects_invalid_utf8_param() {
        let routes = storefront_routes();
        assert!(routes.resolve("/products/%FF").is_err());
    }

    #[test]
    fn test_href_errors() {
        let routes = storefront_routes();
        assert_eq!(
            routes.href("product-detail", &RouteParams::new()),
            Err(RouteError::MissingParam {
                route: "product-detail".to_string(),
                param: "id".to_string(),
            })
        );
        assert_eq!(
            routes.href("wishlist", &RouteParams::new()),
            Err(RouteError::UnknownRoute("wishlist".to_string()))
        );
    }
}
