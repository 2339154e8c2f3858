use crate::{
    abstract_trait::{DynOrderQueryService, DynSellerService},
    domain::{
        requests::{FindOrdersQuery, FindSellersQuery},
        response::{ApiResponse, OrderResponse, SellerResponse},
    },
    middleware::admin_middleware,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/sellers",
    security(("admin_key" = [])),
    params(FindSellersQuery),
    responses(
        (status = 200, description = "All sellers, optionally by status", body = ApiResponse<Vec<SellerResponse>>),
        (status = 401, description = "Admin API key required")
    ),
    tag = "Admin"
)]
pub async fn get_sellers(
    Extension(service): Extension<DynSellerService>,
    Query(params): Query<FindSellersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(params.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/sellers/{id}/approve",
    security(("admin_key" = [])),
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller approved", body = ApiResponse<SellerResponse>),
        (status = 404, description = "Seller not found")
    ),
    tag = "Admin"
)]
pub async fn approve_seller(
    Extension(service): Extension<DynSellerService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.approve(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/sellers/{id}/reject",
    security(("admin_key" = [])),
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller rejected", body = ApiResponse<SellerResponse>),
        (status = 404, description = "Seller not found")
    ),
    tag = "Admin"
)]
pub async fn reject_seller(
    Extension(service): Extension<DynSellerService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.reject(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    security(("admin_key" = [])),
    params(FindOrdersQuery),
    responses(
        (status = 200, description = "Every order, optionally by status", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Admin API key required")
    ),
    tag = "Admin"
)]
pub async fn get_all_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindOrdersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(params.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/sellers", get(get_sellers))
        .route("/api/admin/sellers/{id}/approve", put(approve_seller))
        .route("/api/admin/sellers/{id}/reject", put(reject_seller))
        .route("/api/admin/orders", get(get_all_orders))
        .route_layer(middleware::from_fn(admin_middleware))
        .layer(Extension(app_state.di_container.seller_service.clone()))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(app_state.admin_key.clone()))
}
