use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub seller_id: i64,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

impl Claims {
    pub fn new(seller_id: i64, exp: usize, iat: usize, token_type: String) -> Self {
        Claims {
            seller_id,
            exp,
            iat,
            token_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, seller_id: i64) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        // Seller sessions last a week.
        let exp = (now + Duration::days(7)).timestamp() as usize;

        let claims = Claims::new(seller_id, exp, iat, ACCESS_TOKEN_TYPE.to_string());

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<i64, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.seller_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_seller() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42).unwrap();

        assert_eq!(jwt.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn token_signed_with_other_secret_fails() {
        let token = JwtConfig::new("one-secret").generate_token(7).unwrap();

        assert!(JwtConfig::new("another-secret").verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_fails() {
        let jwt = JwtConfig::new("test-secret");
        let now = Utc::now();
        let claims = Claims::new(
            9,
            (now - Duration::hours(1)).timestamp() as usize,
            (now - Duration::days(8)).timestamp() as usize,
            ACCESS_TOKEN_TYPE.to_string(),
        );
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn wrong_token_type_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let now = Utc::now();
        let claims = Claims::new(
            9,
            (now + Duration::days(1)).timestamp() as usize,
            now.timestamp() as usize,
            "refresh".to_string(),
        );
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        let err = jwt.verify_token(&token).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTokenType));
    }
}
