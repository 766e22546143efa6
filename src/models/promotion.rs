// Promotion catalog records and query DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_page, default_per_page, Pagination};

/// A marketing promotion shown on the public site and managed in the panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount_percent: u8,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub active: bool,
}

/// Query parameters for listing promotions
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PromotionQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: u32,

    /// Restrict to promotions currently running
    #[serde(default)]
    pub active_only: bool,

    /// Case-insensitive match against title and description
    #[validate(length(max = 120, message = "search term must be at most 120 characters"))]
    pub search: Option<String>,
}

impl Default for PromotionQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            active_only: false,
            search: None,
        }
    }
}

impl PromotionQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}
