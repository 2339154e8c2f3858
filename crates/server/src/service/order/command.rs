use crate::{
    abstract_trait::{
        DynCartRepository, DynNotificationRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, DynSellerRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::CreateOrderRequest,
        response::{ApiResponse, OrderResponse},
    },
    model::{CartItem, NewOrder, NewOrderItem, NotificationKind, OrderStatus, SellerStatus},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub cart_repository: DynCartRepository,
    pub seller_repository: DynSellerRepository,
    pub notification_repository: DynNotificationRepository,
}

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    cart_repository: DynCartRepository,
    seller_repository: DynSellerRepository,
    notification_repository: DynNotificationRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            command,
            query,
            cart_repository,
            seller_repository,
            notification_repository,
        } = deps;

        Self {
            command,
            query,
            cart_repository,
            seller_repository,
            notification_repository,
        }
    }

    /// An order belongs to a seller only when every line does.
    fn single_seller(items: &[CartItem]) -> Option<i64> {
        let first = items.first()?.seller_id;
        items
            .iter()
            .all(|item| item.seller_id == first)
            .then_some(first)
    }

    fn build_order(req: &CreateOrderRequest, items: &[CartItem]) -> NewOrder {
        let total_amount = items
            .iter()
            .map(|item| item.price * item.quantity as i64)
            .sum();

        NewOrder {
            customer_name: req.customer_name.clone(),
            customer_email: req.customer_email.clone(),
            customer_phone: req.customer_phone.clone(),
            total_amount,
            seller_id: Self::single_seller(items),
            items: items
                .iter()
                .map(|item| NewOrderItem {
                    food_item_id: item.food_item_id,
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn checkout(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if !self.cart_repository.cart_exists(&req.cart_id).await? {
            return Err(ServiceError::NotFound("Cart not found".to_string()));
        }

        let cart_items = self.cart_repository.items(&req.cart_id).await?;
        if cart_items.is_empty() {
            return Err(ServiceError::BadRequest("Cart is empty".to_string()));
        }

        let new_order = Self::build_order(req, &cart_items);
        let (order, items) = self.command.checkout(&req.cart_id, &new_order).await?;

        info!(
            "Order {} placed by {} ({} lines)",
            order.id,
            order.customer_name,
            items.len()
        );

        if let Some(seller_id) = order.seller_id {
            let message = format!(
                "New order #{} received: {} items, total {}",
                order.id,
                items.iter().map(|i| i.quantity).sum::<i32>(),
                order.total_amount
            );
            // A lost notification should not undo a placed order.
            if let Err(e) = self
                .notification_repository
                .create(seller_id, NotificationKind::NewOrder, &message, Some(order.id))
                .await
            {
                error!("Failed to write new-order notification: {e}");
            }
        }

        Ok(ApiResponse::success(
            "Order placed successfully",
            OrderResponse::from_parts(order, items),
        ))
    }

    async fn update_status(
        &self,
        seller_id: i64,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let seller = self
            .seller_repository
            .find_by_id(seller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller not found".to_string()))?;

        if seller.status != SellerStatus::Approved {
            return Err(ServiceError::Forbidden(
                "Only approved sellers can manage orders".to_string(),
            ));
        }

        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))?;

        if let Some(owner) = order.seller_id {
            if owner != seller_id {
                return Err(ServiceError::Forbidden(
                    "Order belongs to another seller".to_string(),
                ));
            }
        }

        if !order.status.can_transition_to(status) {
            return Err(ServiceError::BadRequest(format!(
                "Cannot move order from {} to {}",
                order.status, status
            )));
        }

        let updated = self.command.update_status(order_id, status).await?;
        let items = self.query.items(order_id).await?;

        Ok(ApiResponse::success(
            "Order status updated",
            OrderResponse::from_parts(updated, items),
        ))
    }
}
