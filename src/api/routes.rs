//! API route configuration and the path classification rules.

use axum::Router;

use crate::api::handlers::dispatch_handler;
use crate::state::AppState;

/// What a request path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind<'a> {
    /// Paths starting with `/add`.
    Create,
    /// Paths starting with `/get`.
    Resolve,
    /// Any other single-segment path; carries the segment, possibly empty.
    Redirect(&'a str),
    Invalid,
}

/// Classifies a request path.
///
/// Prefix matching is deliberate: `/add/x` and `/adder` both create. Any
/// other path of exactly one segment redirects, with `/` yielding an empty
/// id. Everything else is invalid.
pub fn classify(path: &str) -> RouteKind<'_> {
    if path.starts_with("/add") {
        return RouteKind::Create;
    }
    if path.starts_with("/get") {
        return RouteKind::Resolve;
    }

    match path.strip_prefix('/') {
        Some(segment) if !segment.contains('/') => RouteKind::Redirect(segment),
        _ => RouteKind::Invalid,
    }
}

/// Public redirector routes.
///
/// # Endpoints
///
/// - `GET /add?url=..&expires=..` - Create a mapping
/// - `GET /get?id=..`             - Resolve a mapping as JSON
/// - `GET /{id}`                  - 302 redirect to the target
///
/// All three live behind a single fallback so that prefix matching and the
/// `Invalid path` error apply to every path not routed explicitly.
pub fn public_routes() -> Router<AppState> {
    Router::new().fallback(dispatch_handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_create() {
        assert_eq!(classify("/add"), RouteKind::Create);
        assert_eq!(classify("/add/extra"), RouteKind::Create);
        assert_eq!(classify("/adder"), RouteKind::Create);
    }

    #[test]
    fn test_classify_resolve() {
        assert_eq!(classify("/get"), RouteKind::Resolve);
        assert_eq!(classify("/get/"), RouteKind::Resolve);
    }

    #[test]
    fn test_classify_redirect() {
        assert_eq!(classify("/aZ3kQ9x"), RouteKind::Redirect("aZ3kQ9x"));
        assert_eq!(classify("/"), RouteKind::Redirect(""));
    }

    #[test]
    fn test_classify_invalid() {
        assert_eq!(classify("/a/b"), RouteKind::Invalid);
        assert_eq!(classify("/abc/"), RouteKind::Invalid);
        assert_eq!(classify(""), RouteKind::Invalid);
    }
}
