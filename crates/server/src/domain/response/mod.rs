mod api;
mod cart;
mod food_item;
mod notification;
mod order;
mod seller;
mod token;

pub use self::api::ApiResponse;
pub use self::cart::{CartItemResponse, CartResponse};
pub use self::food_item::{FoodItemResponse, to_food_item_responses};
pub use self::notification::NotificationResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::seller::SellerResponse;
pub use self::token::TokenResponse;
