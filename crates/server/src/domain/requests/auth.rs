use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration payload. The wire names are the ones the storefront client
/// has always sent (`restaurantName`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 2, message = "Restaurant name must be at least 2 characters"))]
    pub restaurant_name: String,

    #[validate(length(min = 7, max = 15, message = "Phone must be 7 to 15 digits"))]
    pub phone: String,

    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AuthRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_registration() -> RegisterSellerRequest {
        RegisterSellerRequest {
            name: "Rajesh Kumar".into(),
            email: "rajesh@example.com".into(),
            password: "secret123".into(),
            restaurant_name: "Spice Garden".into(),
            phone: "9876543210".into(),
            address: "MG Road, Hyderabad".into(),
        }
    }

    #[test]
    fn registration_accepts_the_sample_seller() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn registration_rejects_bad_email_and_short_password() {
        let mut req = valid_registration();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());

        let mut req = valid_registration();
        req.password = "x".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn registration_uses_camel_case_wire_names() {
        let json = r#"{
            "name": "A",
            "email": "a@a.com",
            "password": "xxxxxx",
            "restaurantName": "R",
            "phone": "1234567",
            "address": "Somewhere"
        }"#;
        let req: RegisterSellerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.restaurant_name, "R");
    }
}
