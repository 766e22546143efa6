// Catalog listing endpoints for the business panel
//
// Each handler validates and normalizes its query DTO, then delegates to
// the catalog seam. The store is never consulted with an invalid query.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::Validate;

use crate::{
    app::AppState,
    middleware::auth::CurrentUser,
    models::{
        promotion::{Promotion, PromotionQuery},
        reservation::{Reservation, ReservationQuery},
        service_group::{ServiceGroup, ServiceGroupQuery},
        Page,
    },
    services::catalog::CatalogError,
    utils::normalize_filter,
};

/// Response envelope for catalog listings
#[derive(Debug, Serialize)]
pub struct CatalogResponse<T> {
    pub success: bool,
    pub data: Page<T>,
}

fn validation_error_response(errors: validator::ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": "Invalid query parameters",
            "errors": errors,
        })),
    )
        .into_response()
}

fn catalog_error_response(error: CatalogError) -> Response {
    tracing::error!("Catalog lookup failed: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Catalog temporarily unavailable",
        })),
    )
        .into_response()
}

/// GET /api/v1/promotions
pub async fn list_promotions(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(mut query): Query<PromotionQuery>,
) -> Response {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors);
    }
    query.search = normalize_filter(query.search.as_deref());

    match state.catalog.list_promotions(&query).await {
        Ok(page) => Json(CatalogResponse::<Promotion> {
            success: true,
            data: page,
        })
        .into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// GET /api/v1/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(mut query): Query<ReservationQuery>,
) -> Response {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors);
    }
    if !query.date_range_is_ordered() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "date_from must not be after date_to",
            })),
        )
            .into_response();
    }
    query.customer_email = normalize_filter(query.customer_email.as_deref());

    match state.catalog.list_reservations(&query).await {
        Ok(page) => Json(CatalogResponse::<Reservation> {
            success: true,
            data: page,
        })
        .into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// GET /api/v1/service-groups
pub async fn list_service_groups(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(mut query): Query<ServiceGroupQuery>,
) -> Response {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors);
    }
    query.search = normalize_filter(query.search.as_deref());

    match state.catalog.list_service_groups(&query).await {
        Ok(page) => Json(CatalogResponse::<ServiceGroup> {
            success: true,
            data: page,
        })
        .into_response(),
        Err(e) => catalog_error_response(e),
    }
}
