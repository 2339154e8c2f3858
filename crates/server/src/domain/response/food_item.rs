use crate::model::{FoodCategory, FoodItemWithSeller};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FoodItemResponse {
    pub id: i64,
    pub seller_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: FoodCategory,
    pub image_url: String,
    pub is_available: bool,
    pub preparation_time: i32,
    pub rating: f32,
    pub created_at: Option<String>,
    pub seller_name: String,
    pub restaurant_name: String,
}

impl From<FoodItemWithSeller> for FoodItemResponse {
    fn from(value: FoodItemWithSeller) -> Self {
        FoodItemResponse {
            id: value.id,
            seller_id: value.seller_id,
            name: value.name,
            description: value.description,
            price: value.price,
            category: value.category,
            image_url: value.image_url,
            is_available: value.is_available,
            preparation_time: value.preparation_time,
            rating: value.rating,
            created_at: value.created_at.map(|dt| dt.to_string()),
            seller_name: value.seller_name,
            restaurant_name: value.restaurant_name,
        }
    }
}

pub fn to_food_item_responses(rows: Vec<FoodItemWithSeller>) -> Vec<FoodItemResponse> {
    rows.into_iter().map(FoodItemResponse::from).collect()
}
