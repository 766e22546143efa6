// Middleware for the salon backend: token validation and edge navigation
// gating

pub mod auth;
pub mod auth_middleware;
pub mod route_guard;

pub use auth::CurrentUser;
pub use auth_middleware::require_auth;
pub use route_guard::{decide, route_guard, GuardDecision};
