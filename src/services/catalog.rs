// Catalog read access for the panel and the public site
//
// The store is the seam to the data collaborator: handlers validate queries
// and delegate here, nothing below this trait leaks upward. The in-memory
// implementation backs the dev server and the test suite.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use thiserror::Error;

use crate::models::promotion::{Promotion, PromotionQuery};
use crate::models::reservation::{Reservation, ReservationQuery, ReservationStatus};
use crate::models::service_group::{SalonService, ServiceGroup, ServiceGroupQuery};
use crate::models::Page;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Read-side catalog operations consumed by the panel
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_promotions(&self, query: &PromotionQuery) -> Result<Page<Promotion>, CatalogError>;

    async fn list_reservations(
        &self,
        query: &ReservationQuery,
    ) -> Result<Page<Reservation>, CatalogError>;

    async fn list_service_groups(
        &self,
        query: &ServiceGroupQuery,
    ) -> Result<Page<ServiceGroup>, CatalogError>;
}

/// In-memory catalog seeded with representative salon data.
///
/// Immutable after construction; shared read-only across requests.
pub struct InMemoryCatalog {
    promotions: Vec<Promotion>,
    reservations: Vec<Reservation>,
    service_groups: Vec<ServiceGroup>,
}

impl InMemoryCatalog {
    pub fn new(
        promotions: Vec<Promotion>,
        reservations: Vec<Reservation>,
        service_groups: Vec<ServiceGroup>,
    ) -> Self {
        Self {
            promotions,
            reservations,
            service_groups,
        }
    }

    /// Catalog with sample content for development and tests
    pub fn with_sample_data() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date");

        let promotions = vec![
            Promotion {
                id: "promo-spring-glow".to_string(),
                title: "Spring Glow Facial".to_string(),
                description: "20% off all facial treatments booked before the end of May".to_string(),
                discount_percent: 20,
                starts_on: date(2026, 3, 1),
                ends_on: date(2026, 5, 31),
                active: true,
            },
            Promotion {
                id: "promo-first-visit".to_string(),
                title: "First Visit Discount".to_string(),
                description: "15% off your first appointment with any stylist".to_string(),
                discount_percent: 15,
                starts_on: date(2026, 1, 1),
                ends_on: date(2026, 12, 31),
                active: true,
            },
            Promotion {
                id: "promo-winter-care".to_string(),
                title: "Winter Hair Care".to_string(),
                description: "Keratin treatment bundle, last season's campaign".to_string(),
                discount_percent: 25,
                starts_on: date(2025, 11, 1),
                ends_on: date(2026, 1, 31),
                active: false,
            },
        ];

        let start = Utc
            .with_ymd_and_hms(2026, 6, 1, 9, 0, 0)
            .single()
            .expect("valid sample timestamp");
        let reservations = vec![
            Reservation {
                id: "res-0001".to_string(),
                customer_name: "Anna Kowalska".to_string(),
                customer_email: "anna.kowalska@example.com".to_string(),
                service_name: "Balayage".to_string(),
                starts_at: start,
                status: ReservationStatus::Confirmed,
            },
            Reservation {
                id: "res-0002".to_string(),
                customer_name: "Maria Nowak".to_string(),
                customer_email: "maria.nowak@example.com".to_string(),
                service_name: "Gel Manicure".to_string(),
                starts_at: start + Duration::days(1),
                status: ReservationStatus::Pending,
            },
            Reservation {
                id: "res-0003".to_string(),
                customer_name: "Ewa Wisniewska".to_string(),
                customer_email: "ewa.w@example.com".to_string(),
                service_name: "Spring Glow Facial".to_string(),
                starts_at: start + Duration::days(3),
                status: ReservationStatus::Cancelled,
            },
            Reservation {
                id: "res-0004".to_string(),
                customer_name: "Anna Kowalska".to_string(),
                customer_email: "anna.kowalska@example.com".to_string(),
                service_name: "Root Touch-Up".to_string(),
                starts_at: start + Duration::days(14),
                status: ReservationStatus::Pending,
            },
        ];

        let service_groups = vec![
            ServiceGroup {
                id: "grp-hair".to_string(),
                name: "Hair".to_string(),
                description: "Cuts, coloring and styling".to_string(),
                services: vec![
                    SalonService {
                        id: "svc-balayage".to_string(),
                        name: "Balayage".to_string(),
                        duration_minutes: 180,
                        price_cents: 45000,
                    },
                    SalonService {
                        id: "svc-root-touchup".to_string(),
                        name: "Root Touch-Up".to_string(),
                        duration_minutes: 90,
                        price_cents: 22000,
                    },
                ],
            },
            ServiceGroup {
                id: "grp-nails".to_string(),
                name: "Nails".to_string(),
                description: "Manicure and pedicure".to_string(),
                services: vec![SalonService {
                    id: "svc-gel-manicure".to_string(),
                    name: "Gel Manicure".to_string(),
                    duration_minutes: 60,
                    price_cents: 15000,
                }],
            },
            ServiceGroup {
                id: "grp-skin".to_string(),
                name: "Skin Care".to_string(),
                description: "Facials and treatments".to_string(),
                services: vec![SalonService {
                    id: "svc-glow-facial".to_string(),
                    name: "Spring Glow Facial".to_string(),
                    duration_minutes: 75,
                    price_cents: 28000,
                }],
            },
        ];

        Self::new(promotions, reservations, service_groups)
    }
}

fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_promotions(&self, query: &PromotionQuery) -> Result<Page<Promotion>, CatalogError> {
        let filtered: Vec<Promotion> = self
            .promotions
            .iter()
            .filter(|p| !query.active_only || p.active)
            .filter(|p| match query.search.as_deref() {
                Some(term) => matches_search(term, &[&p.title, &p.description]),
                None => true,
            })
            .cloned()
            .collect();

        Ok(Page::from_filtered(filtered, query.pagination()))
    }

    async fn list_reservations(
        &self,
        query: &ReservationQuery,
    ) -> Result<Page<Reservation>, CatalogError> {
        let filtered: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| query.status.map_or(true, |s| r.status == s))
            .filter(|r| {
                query
                    .date_from
                    .map_or(true, |from| r.starts_at.date_naive() >= from)
            })
            .filter(|r| {
                query
                    .date_to
                    .map_or(true, |to| r.starts_at.date_naive() <= to)
            })
            .filter(|r| match query.customer_email.as_deref() {
                Some(email) => r.customer_email.eq_ignore_ascii_case(email),
                None => true,
            })
            .cloned()
            .collect();

        Ok(Page::from_filtered(filtered, query.pagination()))
    }

    async fn list_service_groups(
        &self,
        query: &ServiceGroupQuery,
    ) -> Result<Page<ServiceGroup>, CatalogError> {
        let filtered: Vec<ServiceGroup> = self
            .service_groups
            .iter()
            .filter(|g| match query.search.as_deref() {
                Some(term) => matches_search(term, &[&g.name, &g.description]),
                None => true,
            })
            .cloned()
            .collect();

        Ok(Page::from_filtered(filtered, query.pagination()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_promotions_active_only() {
        let catalog = InMemoryCatalog::with_sample_data();

        let all = catalog
            .list_promotions(&PromotionQuery::default())
            .await
            .unwrap();
        assert_eq!(all.total, 3);

        let active = catalog
            .list_promotions(&PromotionQuery {
                active_only: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(active.total, 2);
        assert!(active.items.iter().all(|p| p.active));
    }

    #[tokio::test]
    async fn test_list_promotions_search_is_case_insensitive() {
        let catalog = InMemoryCatalog::with_sample_data();

        let found = catalog
            .list_promotions(&PromotionQuery {
                search: Some("FACIAL".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(found.total, 1);
        assert_eq!(found.items[0].id, "promo-spring-glow");
    }

    #[tokio::test]
    async fn test_list_reservations_by_status_and_email() {
        let catalog = InMemoryCatalog::with_sample_data();

        let pending = catalog
            .list_reservations(&ReservationQuery {
                status: Some(ReservationStatus::Pending),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(pending.total, 2);

        let annas = catalog
            .list_reservations(&ReservationQuery {
                customer_email: Some("Anna.Kowalska@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(annas.total, 2);
    }

    #[tokio::test]
    async fn test_list_reservations_date_window() {
        let catalog = InMemoryCatalog::with_sample_data();

        let first_week = catalog
            .list_reservations(&ReservationQuery {
                date_from: NaiveDate::from_ymd_opt(2026, 6, 1),
                date_to: NaiveDate::from_ymd_opt(2026, 6, 7),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(first_week.total, 3);
    }

    #[tokio::test]
    async fn test_list_service_groups_pagination() {
        let catalog = InMemoryCatalog::with_sample_data();

        let page = catalog
            .list_service_groups(&ServiceGroupQuery {
                page: 2,
                per_page: 2,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page, 2);
    }
}
