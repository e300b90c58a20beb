use thiserror::Error;

/// Errors raised while building the route table or generating URLs
///
/// An unmatched location is not an error: [`Router::match_route`](crate::Router::match_route)
/// returns `None` and the caller decides what to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("no route named `{0}`")]
    UnknownRouteName(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("unknown route table version `{0}` (expected `initial` or `orders`)")]
    UnknownTableVersion(String),
}

pub type Result<T> = std::result::Result<T, RouterError>;
