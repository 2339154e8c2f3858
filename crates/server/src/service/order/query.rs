use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::response::{ApiResponse, OrderResponse},
    model::{Order, OrderStatus},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }

    async fn with_items(&self, orders: Vec<Order>) -> Result<Vec<OrderResponse>, ServiceError> {
        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.query.items(order.id).await?;
            responses.push(OrderResponse::from_parts(order, items));
        }
        Ok(responses)
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))?;
        let items = self.query.items(order.id).await?;

        Ok(ApiResponse::success(
            "Order",
            OrderResponse::from_parts(order, items),
        ))
    }

    async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_for_seller(seller_id, status).await?;

        Ok(ApiResponse::success(
            "Orders",
            self.with_items(orders).await?,
        ))
    }

    async fn find_all(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all(status).await?;

        Ok(ApiResponse::success(
            "Orders",
            self.with_items(orders).await?,
        ))
    }
}
