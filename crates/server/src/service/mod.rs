mod auth;
mod cart;
mod food_item;
mod notification;
mod order;
mod seller;

pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::food_item::{FoodItemCommandService, FoodItemQueryService};
pub use self::notification::NotificationService;
pub use self::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
pub use self::seller::SellerService;
