use crate::{
    abstract_trait::{
        DynAuthService, DynCartRepository, DynCartService, DynFoodItemCommandRepository,
        DynFoodItemCommandService, DynFoodItemQueryRepository, DynFoodItemQueryService,
        DynNotificationRepository, DynNotificationService, DynOrderCommandRepository,
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService,
        DynSellerRepository, DynSellerService,
    },
    repository::{
        CartRepository, FoodItemCommandRepository, FoodItemQueryRepository,
        NotificationRepository, OrderCommandRepository, OrderQueryRepository, SellerRepository,
    },
    service::{
        AuthService, CartService, FoodItemCommandService, FoodItemQueryService,
        NotificationService, OrderCommandService, OrderCommandServiceDeps, OrderQueryService,
        SellerService,
    },
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub seller_service: DynSellerService,
    pub food_item_query_service: DynFoodItemQueryService,
    pub food_item_command_service: DynFoodItemCommandService,
    pub cart_service: DynCartService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub notification_service: DynNotificationService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("seller_service", &"DynSellerService")
            .field("food_item_query_service", &"DynFoodItemQueryService")
            .field("food_item_command_service", &"DynFoodItemCommandService")
            .field("cart_service", &"DynCartService")
            .field("order_query_service", &"DynOrderQueryService")
            .field("order_command_service", &"DynOrderCommandService")
            .field("notification_service", &"DynNotificationService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let seller_repository: DynSellerRepository =
            Arc::new(SellerRepository::new(pool.clone()));
        let food_item_query_repository: DynFoodItemQueryRepository =
            Arc::new(FoodItemQueryRepository::new(pool.clone()));
        let food_item_command_repository: DynFoodItemCommandRepository =
            Arc::new(FoodItemCommandRepository::new(pool.clone()));
        let cart_repository: DynCartRepository = Arc::new(CartRepository::new(pool.clone()));
        let order_query_repository: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repository: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let notification_repository: DynNotificationRepository =
            Arc::new(NotificationRepository::new(pool));

        let auth_service: DynAuthService = Arc::new(AuthService::new(
            seller_repository.clone(),
            hashing,
            jwt,
        ));

        let seller_service: DynSellerService = Arc::new(SellerService::new(
            seller_repository.clone(),
            notification_repository.clone(),
        ));

        let food_item_query_service: DynFoodItemQueryService =
            Arc::new(FoodItemQueryService::new(food_item_query_repository.clone()));

        let food_item_command_service: DynFoodItemCommandService =
            Arc::new(FoodItemCommandService::new(
                food_item_command_repository,
                food_item_query_repository.clone(),
                seller_repository.clone(),
            ));

        let cart_service: DynCartService = Arc::new(CartService::new(
            cart_repository.clone(),
            food_item_query_repository,
        ));

        let order_query_service: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repository.clone()));

        let order_command_service: DynOrderCommandService =
            Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
                command: order_command_repository,
                query: order_query_repository,
                cart_repository,
                seller_repository,
                notification_repository: notification_repository.clone(),
            }));

        let notification_service: DynNotificationService =
            Arc::new(NotificationService::new(notification_repository));

        Self {
            auth_service,
            seller_service,
            food_item_query_service,
            food_item_command_service,
            cart_service,
            order_query_service,
            order_command_service,
            notification_service,
        }
    }
}
