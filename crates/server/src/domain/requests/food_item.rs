use crate::model::FoodCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_preparation_time() -> i32 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodItemRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Description must be at least 2 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "Price must be at least 1"))]
    #[schema(example = 250)]
    pub price: i64,

    pub category: FoodCategory,

    #[serde(default)]
    pub image_url: String,

    #[serde(default = "default_preparation_time")]
    #[validate(range(min = 1, max = 240, message = "Preparation time must be 1 to 240 minutes"))]
    #[schema(example = 30)]
    pub preparation_time: i32,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodItemRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Description must be at least 2 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "Price must be at least 1"))]
    pub price: i64,

    pub category: FoodCategory,

    #[serde(default)]
    pub image_url: String,

    #[serde(default = "default_preparation_time")]
    #[validate(range(min = 1, max = 240, message = "Preparation time must be 1 to 240 minutes"))]
    pub preparation_time: i32,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAvailabilityRequest {
    pub is_available: bool,
}
