use crate::{
    abstract_trait::DynNotificationService,
    domain::{
        requests::FindNotificationsQuery,
        response::{ApiResponse, NotificationResponse},
    },
    middleware::auth_middleware,
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
    path = "/api/notifications",
    security(("bearer_auth" = [])),
    params(FindNotificationsQuery),
    responses(
        (status = 200, description = "The seller's notifications, newest first", body = ApiResponse<Vec<NotificationResponse>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Notification"
)]
pub async fn get_notifications(
    Extension(service): Extension<DynNotificationService>,
    Extension(seller_id): Extension<i64>,
    Query(params): Query<FindNotificationsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_for_seller(seller_id, params.unread).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = ApiResponse<NotificationResponse>),
        (status = 403, description = "Notification belongs to another seller"),
        (status = 404, description = "Notification not found")
    ),
    tag = "Notification"
)]
pub async fn mark_notification_read(
    Extension(service): Extension<DynNotificationService>,
    Extension(seller_id): Extension<i64>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.mark_read(seller_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn notification_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/notifications", get(get_notifications))
        .route("/api/notifications/{id}/read", put(mark_notification_read))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.notification_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
