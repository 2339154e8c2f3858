use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynFoodItemQueryRepository},
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        response::{ApiResponse, CartResponse},
    },
    model::NewCartItem,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct CartService {
    cart_repository: DynCartRepository,
    food_item_repository: DynFoodItemQueryRepository,
}

impl CartService {
    pub fn new(
        cart_repository: DynCartRepository,
        food_item_repository: DynFoodItemQueryRepository,
    ) -> Self {
        Self {
            cart_repository,
            food_item_repository,
        }
    }

    async fn ensure_cart(&self, cart_id: &str) -> Result<(), ServiceError> {
        if !self.cart_repository.cart_exists(cart_id).await? {
            return Err(ServiceError::NotFound("Cart not found".to_string()));
        }
        Ok(())
    }

    async fn snapshot(
        &self,
        cart_id: &str,
        message: impl Into<String>,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let items = self.cart_repository.items(cart_id).await?;
        Ok(ApiResponse::success(
            message,
            CartResponse::from_items(cart_id.to_string(), items),
        ))
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn create_cart(&self) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart_id = self.cart_repository.create_cart().await?;

        Ok(ApiResponse::success(
            "Cart created",
            CartResponse::from_items(cart_id, vec![]),
        ))
    }

    async fn get_cart(&self, cart_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.ensure_cart(cart_id).await?;
        self.snapshot(cart_id, "Cart").await
    }

    async fn add_item(
        &self,
        cart_id: &str,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.ensure_cart(cart_id).await?;

        let item = self
            .food_item_repository
            .find_by_id(req.food_item_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Food item not found".to_string()))?;

        if !item.is_available {
            return Err(ServiceError::BadRequest(
                "Food item is currently unavailable".to_string(),
            ));
        }

        let line = NewCartItem {
            food_item_id: item.id,
            seller_id: item.seller_id,
            name: item.name,
            price: item.price,
            quantity: req.quantity,
            image_url: item.image_url,
            category: item.category,
        };

        self.cart_repository.upsert_item(cart_id, &line).await?;
        self.snapshot(cart_id, "Item added to cart").await
    }

    async fn update_item(
        &self,
        cart_id: &str,
        food_item_id: i64,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.ensure_cart(cart_id).await?;

        if req.quantity == 0 {
            self.cart_repository
                .remove_item(cart_id, food_item_id)
                .await?;
        } else {
            self.cart_repository
                .set_quantity(cart_id, food_item_id, req.quantity)
                .await?;
        }

        self.snapshot(cart_id, "Cart updated").await
    }

    async fn remove_item(
        &self,
        cart_id: &str,
        food_item_id: i64,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.ensure_cart(cart_id).await?;

        self.cart_repository
            .remove_item(cart_id, food_item_id)
            .await?;
        self.snapshot(cart_id, "Item removed from cart").await
    }

    async fn clear(&self, cart_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        self.ensure_cart(cart_id).await?;

        self.cart_repository.clear(cart_id).await?;
        self.snapshot(cart_id, "Cart cleared").await
    }
}
