// Library exports for the salon backend
// This file exposes modules and functions for library consumers

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, GuardConfig, CONFIG};
pub use middleware::{decide, require_auth, route_guard, CurrentUser, GuardDecision};
pub use models::auth::AccessTokenClaims;
pub use models::{Page, Pagination};
pub use services::{
    CatalogError, CatalogStore, InMemoryCatalog, JwtConfig, JwtError, JwtService, MailerError,
    MailerService,
};
pub use utils::AuthError;

// Re-export route builders
pub use handlers::{auth_routes, catalog_routes, page_routes};

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Initialize application state from the environment.
///
/// Fails fast: a missing or weak token secret aborts here so the service
/// never comes up able to accept authenticated traffic it cannot decide.
pub fn initialize_app_state() -> anyhow::Result<AppState> {
    use tracing::info;

    dotenv::dotenv().ok();

    let config = app_config::config();

    info!("Initializing token service...");
    let jwt_service = Arc::new(JwtService::from_env()?);

    info!("Initializing mailer...");
    let mailer = Arc::new(MailerService::new(config.mailer.clone())?);
    if !mailer.is_configured() {
        info!("Mail delivery credentials absent; mailer reported as unconfigured");
    }

    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::with_sample_data());

    Ok(AppState {
        jwt_service,
        mailer,
        catalog,
        guard: Arc::new(config.guard.clone()),
    })
}

/// CORS policy from configuration
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    }
}

/// Assemble the full application router
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .nest("/auth", handlers::auth_routes(state.clone()))
        .merge(handlers::catalog_routes(state.clone()));

    Router::new()
        .route("/healthz", get(health_check))
        .nest("/api/v1", api)
        .merge(handlers::page_routes(state.clone()))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    use axum::Json;

    let timestamp = chrono::Utc::now().to_rfc3339();

    Json(serde_json::json!({
        "status": "healthy",
        "service": "salon-backend",
        "timestamp": timestamp,
        "components": {
            "mailer": {
                "configured": state.mailer.is_configured()
            }
        }
    }))
}
