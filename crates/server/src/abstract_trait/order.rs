use crate::{
    domain::{
        requests::CreateOrderRequest,
        response::{ApiResponse, OrderResponse},
    },
    model::{NewOrder, Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
    async fn items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError>;
    /// Orders a seller's dashboard shows: assigned to them, plus unassigned
    /// multi-restaurant orders.
    async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn find_all(&self, status: Option<OrderStatus>)
    -> Result<Vec<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// One transaction: insert the order and its lines, empty the cart.
    async fn checkout(
        &self,
        cart_id: &str,
        order: &NewOrder,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;
    async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_all(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn checkout(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        seller_id: i64,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
