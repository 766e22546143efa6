// Common test utilities shared across integration tests
// Builds application state directly, without touching the environment

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use salon_backend_core::app_config::{GuardConfig, MailerConfig};
use salon_backend_core::{
    build_router, AppState, CatalogStore, InMemoryCatalog, JwtConfig, JwtService, MailerService,
};

/// Secret used by every test token; long enough to pass key construction
pub const TEST_SECRET: &str = "test-token-secret-hs256-minimum-32-characters";

pub fn test_mailer_config() -> MailerConfig {
    MailerConfig {
        api_url: "https://api.resend.com/emails".to_string(),
        api_key: "test_key".to_string(),
        from_email: "noreply@salon.test".to_string(),
        from_name: "Test Salon".to_string(),
        support_email: "support@salon.test".to_string(),
        site_url: "https://salon.test".to_string(),
        panel_url: "https://panel.salon.test".to_string(),
    }
}

pub fn test_state() -> AppState {
    let jwt_config = JwtConfig::new(TEST_SECRET, 3600).expect("test secret is long enough");
    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::with_sample_data());

    AppState {
        jwt_service: Arc::new(JwtService::new(jwt_config)),
        mailer: Arc::new(MailerService::new(test_mailer_config()).expect("templates compile")),
        catalog,
        guard: Arc::new(GuardConfig::default()),
    }
}

/// Full application router over test state
pub fn test_router() -> Router {
    build_router(test_state(), &["*".to_string()])
}

/// Mint a token signed with the test secret
pub fn mint_test_token(user_id: &str, email: &str) -> String {
    let jwt_config = JwtConfig::new(TEST_SECRET, 3600).expect("test secret is long enough");
    JwtService::new(jwt_config)
        .mint_token(user_id, email)
        .expect("minting with a valid config succeeds")
}

/// Bare GET request
pub fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request builds")
}

/// GET request carrying a bearer token
pub fn authed_get_request(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request builds")
}

/// Collect a response body into JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
