use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;

/// The shared key admin routes are guarded with, from `ADMIN_API_KEY`.
#[derive(Clone)]
pub struct AdminKey(pub String);

pub async fn admin_middleware(
    Extension(key): Extension<AdminKey>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "));

    match presented {
        Some(value) if value == key.0 => Ok(next.run(req).await),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("fail", "Admin API key required")),
        )),
    }
}
