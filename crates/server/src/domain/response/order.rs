use crate::model::{Order, OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub food_item_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            food_item_id: value.food_item_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<OrderItemResponse>,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub seller_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        OrderResponse {
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount,
            status: order.status,
            seller_id: order.seller_id,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }
}
