use crate::model::{CartItem, FoodCategory};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub food_item_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub image_url: String,
    pub category: FoodCategory,
    pub line_total: i64,
}

impl From<CartItem> for CartItemResponse {
    fn from(value: CartItem) -> Self {
        let line_total = value.price * value.quantity as i64;
        CartItemResponse {
            food_item_id: value.food_item_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
            image_url: value.image_url,
            category: value.category,
            line_total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub cart_id: String,
    pub items: Vec<CartItemResponse>,
    pub total_items: i64,
    pub total_amount: i64,
}

impl CartResponse {
    pub fn from_items(cart_id: String, items: Vec<CartItem>) -> Self {
        let items: Vec<CartItemResponse> = items.into_iter().map(CartItemResponse::from).collect();
        let total_items = items.iter().map(|i| i.quantity as i64).sum();
        let total_amount = items.iter().map(|i| i.line_total).sum();

        CartResponse {
            cart_id,
            items,
            total_items,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(food_item_id: i64, price: i64, quantity: i32) -> CartItem {
        CartItem {
            id: food_item_id,
            cart_id: "cart".into(),
            food_item_id,
            seller_id: 1,
            name: format!("item-{food_item_id}"),
            price,
            quantity,
            image_url: String::new(),
            category: FoodCategory::Veg,
        }
    }

    #[test]
    fn totals_sum_across_lines_and_quantities() {
        let cart = CartResponse::from_items(
            "cart".into(),
            vec![line(1, 250, 2), line(2, 80, 1), line(3, 60, 3)],
        );

        assert_eq!(cart.total_items, 6);
        assert_eq!(cart.total_amount, 250 * 2 + 80 + 60 * 3);
        assert_eq!(cart.items[0].line_total, 500);
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = CartResponse::from_items("cart".into(), vec![]);

        assert!(cart.items.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_amount, 0);
    }
}
