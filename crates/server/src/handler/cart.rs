use crate::{
    abstract_trait::DynCartService,
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        response::{ApiResponse, CartResponse},
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 201, description = "Empty cart created", body = ApiResponse<CartResponse>)
    ),
    tag = "Cart"
)]
pub async fn create_cart(
    Extension(service): Extension<DynCartService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_cart().await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}",
    params(("cart_id" = String, Path, description = "Cart token")),
    responses(
        (status = 200, description = "Cart contents and totals", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart not found")
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(&cart_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/items",
    params(("cart_id" = String, Path, description = "Cart token")),
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Item added; same item again bumps quantity", body = ApiResponse<CartResponse>),
        (status = 400, description = "Food item unavailable"),
        (status = 404, description = "Cart or food item not found")
    ),
    tag = "Cart"
)]
pub async fn add_cart_item(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
    ValidatedJson(body): ValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_item(&cart_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/carts/{cart_id}/items/{food_item_id}",
    params(
        ("cart_id" = String, Path, description = "Cart token"),
        ("food_item_id" = i64, Path, description = "Food item ID")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity updated; zero removes the line", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or line not found")
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    Extension(service): Extension<DynCartService>,
    Path((cart_id, food_item_id)): Path<(String, i64)>,
    ValidatedJson(body): ValidatedJson<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_item(&cart_id, food_item_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}/items/{food_item_id}",
    params(
        ("cart_id" = String, Path, description = "Cart token"),
        ("food_item_id" = i64, Path, description = "Food item ID")
    ),
    responses(
        (status = 200, description = "Line removed", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or line not found")
    ),
    tag = "Cart"
)]
pub async fn remove_cart_item(
    Extension(service): Extension<DynCartService>,
    Path((cart_id, food_item_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_item(&cart_id, food_item_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}",
    params(("cart_id" = String, Path, description = "Cart token")),
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart not found")
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.clear(&cart_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/carts", post(create_cart))
        .route("/api/carts/{cart_id}", get(get_cart))
        .route("/api/carts/{cart_id}/items", post(add_cart_item))
        .route(
            "/api/carts/{cart_id}/items/{food_item_id}",
            put(update_cart_item),
        )
        .route(
            "/api/carts/{cart_id}/items/{food_item_id}",
            delete(remove_cart_item),
        )
        .route("/api/carts/{cart_id}", delete(clear_cart))
        .layer(Extension(app_state.di_container.cart_service.clone()))
}
