// HTTP handlers for the salon backend

pub mod auth;
pub mod catalog;
pub mod pages;

use crate::app::AppState;
use crate::middleware::{require_auth, route_guard};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Authentication routes (token validator applied)
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/validate", post(auth::validate_token))
        .layer(middleware::from_fn_with_state(state, require_auth))
}

/// Catalog routes for the panel (token validator applied)
pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/promotions", get(catalog::list_promotions))
        .route("/reservations", get(catalog::list_reservations))
        .route("/service-groups", get(catalog::list_service_groups))
        .layer(middleware::from_fn_with_state(state, require_auth))
}

/// Panel navigation routes (route guard applied).
///
/// The guard only tests artifact presence; pages past it still talk to the
/// API with a bearer token that the validator checks for real.
pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(pages::login))
        .route("/bms", get(pages::reservations_panel))
        .route("/bms/reservations", get(pages::reservations_panel))
        .layer(middleware::from_fn_with_state(state, route_guard))
}
