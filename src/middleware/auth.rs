// Request-scoped identity attached by the token validator

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app::AppState;

/// Identity of the authenticated caller, projected from verified token
/// claims.
///
/// Exactly these two fields: nothing else from the token payload reaches
/// handlers. Lives in request extensions for one request and is dropped
/// with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

/// Extractor for CurrentUser from request extensions.
///
/// Handlers declare `user: CurrentUser` in their parameters; a route that
/// is not behind `require_auth` has no identity and rejects here.
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "success": false,
                        "message": "Authentication required"
                    })),
                )
            })
    }
}
