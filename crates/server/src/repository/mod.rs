mod cart;
mod food_item;
mod notification;
mod order;
mod seller;

pub use self::cart::CartRepository;
pub use self::food_item::{FoodItemCommandRepository, FoodItemQueryRepository};
pub use self::notification::NotificationRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::seller::SellerRepository;
