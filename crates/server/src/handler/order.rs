use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderRequest, FindOrdersQuery, UpdateOrderStatusRequest},
        response::{ApiResponse, OrderResponse},
    },
    middleware::{ValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed, cart emptied", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Empty cart or validation error"),
        (status = 404, description = "Cart not found")
    ),
    tag = "Order"
)]
pub async fn checkout_handler(
    Extension(service): Extension<DynOrderCommandService>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its lines", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    security(("bearer_auth" = [])),
    params(FindOrdersQuery),
    responses(
        (status = 200, description = "The seller's orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Order"
)]
pub async fn get_seller_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(seller_id): Extension<i64>,
    Query(params): Query<FindOrdersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_for_seller(seller_id, params.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status advanced", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Illegal status transition"),
        (status = 403, description = "Order belongs to another seller"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(seller_id): Extension<i64>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(seller_id, id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route("/api/orders", post(checkout_handler))
        .route("/api/orders/{id}", get(get_order));

    let protected = OpenApiRouter::new()
        .route("/api/orders", get(get_seller_orders))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route_layer(middleware::from_fn(auth_middleware));

    public
        .merge(protected)
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
