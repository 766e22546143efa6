// Service layer for the salon backend

pub mod catalog;
pub mod jwt;
pub mod mailer;

pub use catalog::{CatalogError, CatalogStore, InMemoryCatalog};
pub use jwt::{JwtConfig, JwtError, JwtService};
pub use mailer::{MailerError, MailerService};
