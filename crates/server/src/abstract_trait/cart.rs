use crate::{
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        response::{ApiResponse, CartResponse},
    },
    model::{CartItem, NewCartItem},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn create_cart(&self) -> Result<String, RepositoryError>;
    async fn cart_exists(&self, cart_id: &str) -> Result<bool, RepositoryError>;
    async fn items(&self, cart_id: &str) -> Result<Vec<CartItem>, RepositoryError>;
    /// Inserts a line, or bumps the quantity when the item is already there.
    async fn upsert_item(&self, cart_id: &str, item: &NewCartItem)
    -> Result<(), RepositoryError>;
    async fn set_quantity(
        &self,
        cart_id: &str,
        food_item_id: i64,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
    async fn remove_item(&self, cart_id: &str, food_item_id: i64)
    -> Result<(), RepositoryError>;
    async fn clear(&self, cart_id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn create_cart(&self) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn get_cart(&self, cart_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        cart_id: &str,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_item(
        &self,
        cart_id: &str,
        food_item_id: i64,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        cart_id: &str,
        food_item_id: i64,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn clear(&self, cart_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
