mod auth;
mod cart;
mod food_item;
mod order;
mod seller;

pub use self::auth::{AuthRequest, RegisterSellerRequest};
pub use self::cart::{AddCartItemRequest, UpdateCartItemRequest};
pub use self::food_item::{
    CreateFoodItemRequest, UpdateAvailabilityRequest, UpdateFoodItemRequest,
};
pub use self::order::{CreateOrderRequest, FindOrdersQuery, UpdateOrderStatusRequest};
pub use self::seller::{FindNotificationsQuery, FindSellersQuery};
