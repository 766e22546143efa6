// Service group catalog records and query DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_page, default_per_page, Pagination};

/// A single bookable salon service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalonService {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub price_cents: u32,
}

/// A named group of services (e.g. "Hair", "Nails") as presented on the
/// public site and in the panel's service editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub services: Vec<SalonService>,
}

/// Query parameters for listing service groups
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceGroupQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: u32,

    /// Case-insensitive match against group name and description
    #[validate(length(max = 120, message = "search term must be at most 120 characters"))]
    pub search: Option<String>,
}

impl Default for ServiceGroupQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            search: None,
        }
    }
}

impl ServiceGroupQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query: ServiceGroupQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
        assert!(query.search.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_overlong_search_rejected() {
        let query = ServiceGroupQuery {
            search: Some("y".repeat(200)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }
}
