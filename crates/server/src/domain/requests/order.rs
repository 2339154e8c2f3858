use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(equal = 36, message = "Cart ID must be a UUID"))]
    pub cart_id: String,

    #[validate(length(min = 2, message = "Customer name must be at least 2 characters"))]
    pub customer_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub customer_email: String,

    #[validate(length(min = 7, max = 15, message = "Phone must be 7 to 15 digits"))]
    pub customer_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindOrdersQuery {
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn checkout_requires_a_uuid_shaped_cart_id() {
        let req = CreateOrderRequest {
            cart_id: "short".into(),
            customer_name: "Asha".into(),
            customer_email: "asha@example.com".into(),
            customer_phone: "9876543210".into(),
        };
        assert!(req.validate().is_err());

        let req = CreateOrderRequest {
            cart_id: "3e0f9a8a-1f4e-4ac2-9a39-1f0f4ed01f6b".into(),
            ..req
        };
        assert!(req.validate().is_ok());
    }
}
