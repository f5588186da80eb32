//! Route table errors.

use thiserror::Error;

/// Errors from resolving paths or building URLs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route matches the path.
    #[error("Route not found: {0}")]
    NotFound(String),

    /// No route is registered under the name.
    #[error("Unknown route name: {0}")]
    UnknownRoute(String),

    /// A URL was requested without a value for one of the route's parameters.
    #[error("Missing parameter '{param}' for route {route}")]
    MissingParam { route: String, param: String },
}
