use crate::model::FoodCategory;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One line of an anonymous cart. Name, price, image and category are copied
/// from the menu row at add time, so checkout totals stay stable even if the
/// seller edits the menu mid-session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: String,
    pub food_item_id: i64,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub image_url: String,
    pub category: FoodCategory,
}

/// Write model for a cart line, built by the cart service from the menu row.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub food_item_id: i64,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub image_url: String,
    pub category: FoodCategory,
}
