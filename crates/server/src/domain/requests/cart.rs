use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddCartItemRequest {
    #[validate(range(min = 1, message = "Food item ID is required"))]
    #[schema(example = 1)]
    pub food_item_id: i64,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 50, message = "Quantity must be 1 to 50"))]
    #[schema(example = 2)]
    pub quantity: i32,
}

/// Quantity 0 removes the line, anything else replaces it — the same
/// semantics the cart's quantity steppers always had.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 0, max = 50, message = "Quantity must be 0 to 50"))]
    pub quantity: i32,
}
