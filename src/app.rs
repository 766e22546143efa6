// Application state shared across handlers

use std::sync::Arc;

use crate::{
    app_config::GuardConfig,
    services::{CatalogStore, JwtService, MailerService},
};

#[derive(Clone)]
pub struct AppState {
    pub jwt_service: Arc<JwtService>,
    pub mailer: Arc<MailerService>,
    pub catalog: Arc<dyn CatalogStore>,
    pub guard: Arc<GuardConfig>,
}
