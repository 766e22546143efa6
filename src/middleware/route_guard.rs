// Presence-only route guard for panel navigation
//
// Gates navigation between the panel and the login area on whether a token
// artifact exists, without ever verifying it. Forged or expired artifacts
// pass here and are rejected by the token validator on the actual API call;
// that asymmetry is intentional and keeps the edge check cheap.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{app::AppState, app_config::GuardConfig};

/// Outcome of the guard for one navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Path is outside the guarded prefixes, or the artifact state already
    /// matches the area
    PassThrough,
    /// Protected path without an artifact
    ToLogin,
    /// Login path with an artifact
    ToHome,
}

fn path_is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(&format!("{}/", prefix))
}

/// Pure redirect decision over explicit inputs.
///
/// `has_token` is presence only; no token value ever reaches this function.
pub fn decide(path: &str, has_token: bool, guard: &GuardConfig) -> GuardDecision {
    if path_is_under(path, &guard.protected_prefix) && !has_token {
        return GuardDecision::ToLogin;
    }

    if path_is_under(path, &guard.login_prefix) && has_token {
        return GuardDecision::ToHome;
    }

    GuardDecision::PassThrough
}

/// Whether the request carries a token artifact.
///
/// Either source counts: a non-empty cookie or any `authorization` header.
/// The two are never compared; the validator is the authority on the API
/// call that follows.
pub fn has_token_artifact(request: &Request<Body>, cookie_name: &str) -> bool {
    let jar = CookieJar::from_headers(request.headers());
    let cookie_present = jar
        .get(cookie_name)
        .map(|c| !c.value().is_empty())
        .unwrap_or(false);

    cookie_present || request.headers().contains_key(header::AUTHORIZATION)
}

/// Navigation guard middleware for the panel page routes.
///
/// Emits at most one redirect per request and never errors; a missing
/// artifact is a valid input, not a failure.
pub async fn route_guard(
    State(app_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let guard = &app_state.guard;
    let has_token = has_token_artifact(&request, &guard.cookie_name);

    match decide(request.uri().path(), has_token, guard) {
        GuardDecision::ToLogin => Redirect::temporary(&guard.login_path).into_response(),
        GuardDecision::ToHome => Redirect::temporary(&guard.home_path).into_response(),
        GuardDecision::PassThrough => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> GuardConfig {
        GuardConfig::default()
    }

    #[test]
    fn test_protected_path_without_token_goes_to_login() {
        assert_eq!(
            decide("/bms/reservations", false, &guard()),
            GuardDecision::ToLogin
        );
        assert_eq!(decide("/bms", false, &guard()), GuardDecision::ToLogin);
    }

    #[test]
    fn test_protected_path_with_token_passes() {
        assert_eq!(
            decide("/bms/reservations", true, &guard()),
            GuardDecision::PassThrough
        );
    }

    #[test]
    fn test_login_path_with_token_goes_home() {
        assert_eq!(decide("/auth/login", true, &guard()), GuardDecision::ToHome);
        assert_eq!(decide("/auth", true, &guard()), GuardDecision::ToHome);
    }

    #[test]
    fn test_login_path_without_token_passes() {
        assert_eq!(
            decide("/auth/login", false, &guard()),
            GuardDecision::PassThrough
        );
    }

    #[test]
    fn test_unguarded_paths_always_pass() {
        for has_token in [false, true] {
            assert_eq!(
                decide("/public/anything", has_token, &guard()),
                GuardDecision::PassThrough
            );
            assert_eq!(decide("/", has_token, &guard()), GuardDecision::PassThrough);
        }
    }

    #[test]
    fn test_prefix_match_requires_segment_boundary() {
        // "/bmsx" shares bytes with the prefix but is a different route
        assert_eq!(decide("/bmsx", false, &guard()), GuardDecision::PassThrough);
        assert_eq!(
            decide("/authors", true, &guard()),
            GuardDecision::PassThrough
        );
    }

    #[test]
    fn test_empty_cookie_counts_as_absent() {
        let request = Request::builder()
            .uri("/bms/reservations")
            .header(header::COOKIE, "tokens=")
            .body(Body::empty())
            .unwrap();

        assert!(!has_token_artifact(&request, "tokens"));
    }

    #[test]
    fn test_cookie_presence_counts() {
        let request = Request::builder()
            .uri("/bms/reservations")
            .header(header::COOKIE, "tokens=opaque-value")
            .body(Body::empty())
            .unwrap();

        assert!(has_token_artifact(&request, "tokens"));
    }

    #[test]
    fn test_authorization_header_alone_counts() {
        let request = Request::builder()
            .uri("/bms/reservations")
            .header(header::AUTHORIZATION, "Bearer whatever")
            .body(Body::empty())
            .unwrap();

        assert!(has_token_artifact(&request, "tokens"));
    }

    #[test]
    fn test_no_artifact_at_all() {
        let request = Request::builder()
            .uri("/bms/reservations")
            .body(Body::empty())
            .unwrap();

        assert!(!has_token_artifact(&request, "tokens"));
    }
}
