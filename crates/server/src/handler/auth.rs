use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{AuthRequest, RegisterSellerRequest},
        response::{ApiResponse, SellerResponse, TokenResponse},
    },
    middleware::{ValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/sellers/register",
    request_body = RegisterSellerRequest,
    responses(
        (status = 201, description = "Seller registered", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Validation error or duplicate email")
    ),
    tag = "Auth"
)]
pub async fn register_seller_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<RegisterSellerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/sellers/login",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Invalid email or password"),
        (status = 403, description = "Seller account rejected")
    ),
    tag = "Auth"
)]
pub async fn login_seller_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<AuthRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sellers/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated seller profile", body = ApiResponse<SellerResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth"
)]
pub async fn me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(seller_id): Extension<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.me(seller_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route("/api/sellers/register", post(register_seller_handler))
        .route("/api/sellers/login", post(login_seller_handler));

    let protected = OpenApiRouter::new()
        .route("/api/sellers/me", get(me_handler))
        .route_layer(middleware::from_fn(auth_middleware));

    public
        .merge(protected)
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
