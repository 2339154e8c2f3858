use crate::{
    abstract_trait::{DynFoodItemCommandService, DynFoodItemQueryService},
    domain::{
        requests::{CreateFoodItemRequest, UpdateAvailabilityRequest, UpdateFoodItemRequest},
        response::{ApiResponse, FoodItemResponse},
    },
    middleware::{ValidatedJson, auth_middleware},
    model::FoodCategory,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::{str::FromStr, sync::Arc};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/food-items",
    responses(
        (status = 200, description = "Available food items, newest first", body = ApiResponse<Vec<FoodItemResponse>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "FoodItem"
)]
pub async fn get_food_items(
    Extension(service): Extension<DynFoodItemQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_available().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/food-items/category/{category}",
    params(("category" = String, Path, description = "Menu category, e.g. veg / non-veg / tiffins")),
    responses(
        (status = 200, description = "Available food items in a category", body = ApiResponse<Vec<FoodItemResponse>>),
        (status = 400, description = "Unknown category")
    ),
    tag = "FoodItem"
)]
pub async fn get_food_items_by_category(
    Extension(service): Extension<DynFoodItemQueryService>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let category = FoodCategory::from_str(&category)
        .map_err(HttpError::BadRequest)?;

    let response = service.find_by_category(category).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/food-items/mine",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated seller's items", body = ApiResponse<Vec<FoodItemResponse>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "FoodItem"
)]
pub async fn get_my_food_items(
    Extension(service): Extension<DynFoodItemQueryService>,
    Extension(seller_id): Extension<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_mine(seller_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/food-items",
    security(("bearer_auth" = [])),
    request_body = CreateFoodItemRequest,
    responses(
        (status = 201, description = "Food item created", body = ApiResponse<FoodItemResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Seller not approved")
    ),
    tag = "FoodItem"
)]
pub async fn create_food_item(
    Extension(service): Extension<DynFoodItemCommandService>,
    Extension(seller_id): Extension<i64>,
    ValidatedJson(body): ValidatedJson<CreateFoodItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(seller_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/food-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Food item ID")),
    request_body = UpdateFoodItemRequest,
    responses(
        (status = 200, description = "Food item updated", body = ApiResponse<FoodItemResponse>),
        (status = 403, description = "Item belongs to another seller"),
        (status = 404, description = "Food item not found")
    ),
    tag = "FoodItem"
)]
pub async fn update_food_item(
    Extension(service): Extension<DynFoodItemCommandService>,
    Extension(seller_id): Extension<i64>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateFoodItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(seller_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/food-items/{id}/availability",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Food item ID")),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Availability updated", body = ApiResponse<FoodItemResponse>),
        (status = 403, description = "Item belongs to another seller"),
        (status = 404, description = "Food item not found")
    ),
    tag = "FoodItem"
)]
pub async fn update_food_item_availability(
    Extension(service): Extension<DynFoodItemCommandService>,
    Extension(seller_id): Extension<i64>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateAvailabilityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .set_availability(seller_id, id, body.is_available)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/food-items/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Food item ID")),
    responses(
        (status = 200, description = "Food item deleted", body = serde_json::Value),
        (status = 403, description = "Item belongs to another seller"),
        (status = 404, description = "Food item not found")
    ),
    tag = "FoodItem"
)]
pub async fn delete_food_item(
    Extension(service): Extension<DynFoodItemCommandService>,
    Extension(seller_id): Extension<i64>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(seller_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn food_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route("/api/food-items", get(get_food_items))
        .route(
            "/api/food-items/category/{category}",
            get(get_food_items_by_category),
        );

    let protected = OpenApiRouter::new()
        .route("/api/food-items/mine", get(get_my_food_items))
        .route("/api/food-items", post(create_food_item))
        .route("/api/food-items/{id}", put(update_food_item))
        .route(
            "/api/food-items/{id}/availability",
            put(update_food_item_availability),
        )
        .route("/api/food-items/{id}", delete(delete_food_item))
        .route_layer(middleware::from_fn(auth_middleware));

    public
        .merge(protected)
        .layer(Extension(app_state.di_container.food_item_query_service.clone()))
        .layer(Extension(
            app_state.di_container.food_item_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
