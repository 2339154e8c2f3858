mod cart;
mod food_item;
mod notification;
mod order;
mod seller;

pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::food_item::{
    DynFoodItemCommandRepository, DynFoodItemCommandService, DynFoodItemQueryRepository,
    DynFoodItemQueryService, FoodItemCommandRepositoryTrait, FoodItemCommandServiceTrait,
    FoodItemQueryRepositoryTrait, FoodItemQueryServiceTrait,
};
pub use self::notification::{
    DynNotificationRepository, DynNotificationService, NotificationRepositoryTrait,
    NotificationServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::seller::{
    AuthServiceTrait, DynAuthService, DynSellerRepository, DynSellerService,
    SellerRepositoryTrait, SellerServiceTrait,
};
