use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// JSON extractor that runs the request's `validator` rules before the
/// handler sees it. Deserialization and validation failures are both 400s
/// in the same `ErrorResponse` envelope every other error uses.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    rejection.status(),
                    Json(ErrorResponse::new("error", rejection.body_text())),
                )
            })?;

        body.validate().map_err(|errors| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("error", flatten_errors(&errors))),
            )
        })?;

        Ok(Self(body))
    }
}

fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                match error.message.as_ref() {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: invalid value"),
                }
            })
        })
        .collect();

    messages.sort();
    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,

        #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
        password: String,
    }

    #[test]
    fn flattened_messages_name_each_bad_field() {
        let probe = Probe {
            email: "nope".into(),
            password: "x".into(),
        };
        let errors = probe.validate().unwrap_err();
        let flat = flatten_errors(&errors);

        assert!(flat.contains("email: Invalid email format"));
        assert!(flat.contains("password: Password must be at least 6 characters"));
    }
}
