use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            // The storefront API reports bad credentials as 400, not 401,
            // and never says which of email/password was wrong.
            ServiceError::InvalidCredentials => {
                HttpError::BadRequest("Invalid email or password".to_string())
            }

            ServiceError::BadRequest(msg) => HttpError::BadRequest(msg),

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                // Duplicate registration is a client mistake here (400),
                // with the exact message the storefront expects.
                RepositoryError::AlreadyExists(msg) => HttpError::BadRequest(msg),
                RepositoryError::ForeignKey(msg) => HttpError::BadRequest(msg),
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        match HttpError::from(err) {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[test]
    fn bad_credentials_map_to_400() {
        assert_eq!(
            status_of(ServiceError::InvalidCredentials),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn duplicate_email_maps_to_400_with_message() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists(
            "Seller already exists with this email".into(),
        ));
        match HttpError::from(err) {
            HttpError::BadRequest(msg) => {
                assert_eq!(msg, "Seller already exists with this email")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn missing_rows_map_to_404() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::NotFound("Cart not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn ownership_violations_map_to_403() {
        assert_eq!(
            status_of(ServiceError::Forbidden("not yours".into())),
            StatusCode::FORBIDDEN
        );
    }
}
