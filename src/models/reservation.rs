// Reservation catalog records and query DTO

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_page, default_per_page, Pagination};

/// Lifecycle state of a reservation.
///
/// Transitions are owned by the booking collaborator; this service only
/// filters on the state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A booked appointment as listed in the business panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub service_name: String,
    pub starts_at: DateTime<Utc>,
    pub status: ReservationStatus,
}

/// Query parameters for listing reservations
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReservationQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: u32,

    pub status: Option<ReservationStatus>,

    /// Inclusive lower bound on the appointment date
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on the appointment date
    pub date_to: Option<NaiveDate>,

    #[validate(email(message = "Invalid email format"))]
    pub customer_email: Option<String>,
}

impl Default for ReservationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            status: None,
            date_from: None,
            date_to: None,
            customer_email: None,
        }
    }
}

impl ReservationQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// An inverted date window can never match anything; reject it up front
    pub fn date_range_is_ordered(&self) -> bool {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");

        let status: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_query_defaults() {
        let query: ReservationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
        assert!(query.status.is_none());
        assert!(query.validate().is_ok());
        assert!(query.date_range_is_ordered());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let query = ReservationQuery {
            customer_email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_inverted_date_range() {
        let query = ReservationQuery {
            date_from: NaiveDate::from_ymd_opt(2025, 6, 10),
            date_to: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        };
        assert!(!query.date_range_is_ordered());

        let query = ReservationQuery {
            date_from: NaiveDate::from_ymd_opt(2025, 6, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..Default::default()
        };
        assert!(query.date_range_is_ordered());
    }
}
