mod cart;
mod food_item;
mod notification;
mod order;
mod seller;

pub use self::cart::{CartItem, NewCartItem};
pub use self::food_item::{FoodCategory, FoodItem, FoodItemWithSeller};
pub use self::notification::{Notification, NotificationKind};
pub use self::order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
pub use self::seller::{Seller, SellerStatus};
