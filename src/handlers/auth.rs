// Authentication endpoints: identity echo and client-side token checks
//
// Both routes sit behind the token validator middleware; by the time a
// handler runs, the request has been verified and carries CurrentUser.

use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::middleware::auth::CurrentUser;

/// Standard response envelope for auth endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenStatus {
    pub valid: bool,
    pub user: CurrentUser,
}

/// GET /api/v1/auth/me - identity of the authenticated caller
pub async fn get_current_user(user: CurrentUser) -> Json<AuthResponse<CurrentUser>> {
    Json(AuthResponse {
        success: true,
        data: Some(user),
        message: "Authenticated".to_string(),
    })
}

/// POST /api/v1/auth/validate - client-side check that a token still works.
///
/// Reaching this handler already proves the token verified; the body lets
/// panel clients confirm who the token belongs to without decoding it.
pub async fn validate_token(user: CurrentUser) -> Json<AuthResponse<TokenStatus>> {
    Json(AuthResponse {
        success: true,
        data: Some(TokenStatus { valid: true, user }),
        message: "Token is valid".to_string(),
    })
}
