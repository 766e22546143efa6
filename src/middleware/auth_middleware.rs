// Token validator middleware for protected API routes
// Verifies bearer tokens and injects CurrentUser into request extensions

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{app::AppState, middleware::auth::CurrentUser, utils::auth_errors::AuthError};

/// Validates the bearer credential and attaches the caller's identity.
///
/// Fail-closed: any missing, malformed, badly signed or expired credential
/// rejects the request here, before a handler runs. The scheme prefix is
/// matched case-sensitively, so `bearer x` is as unauthenticated as no
/// header at all.
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            return AuthError::MissingCredentials.into_response();
        },
    };

    match app_state.jwt_service.verify_token(token) {
        Ok(claims) => {
            // Project the claims down to the two identity fields; the rest
            // of the payload stays behind this boundary.
            let user = CurrentUser {
                id: claims.sub,
                email: claims.email,
            };

            request.extensions_mut().insert(user);

            next.run(request).await
        },
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            AuthError::InvalidToken.into_response()
        },
    }
}
