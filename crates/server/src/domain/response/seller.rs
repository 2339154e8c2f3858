use crate::model::{Seller, SellerStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the API says about a seller. The password hash never leaves the
/// model layer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SellerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restaurant_name: String,
    pub address: String,
    pub status: SellerStatus,
    pub created_at: Option<String>,
}

impl From<Seller> for SellerResponse {
    fn from(value: Seller) -> Self {
        SellerResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            restaurant_name: value.restaurant_name,
            address: value.address,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let seller = Seller {
            id: 1,
            name: "Rajesh Kumar".into(),
            email: "rajesh@example.com".into(),
            password: "$2b$12$secret-hash".into(),
            restaurant_name: "Spice Garden".into(),
            phone: "9876543210".into(),
            address: "MG Road, Hyderabad".into(),
            status: SellerStatus::Approved,
            created_at: None,
        };

        let json = serde_json::to_string(&SellerResponse::from(seller)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }
}
