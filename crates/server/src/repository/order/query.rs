use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    model::{Order, OrderItem, OrderStatus},
    repository::order::ORDER_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, food_item_id, name, price, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {} items: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, RepositoryError> {
        let orders = match status {
            Some(status) => {
                sqlx::query_as::<_, Order>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders \
                     WHERE (seller_id = ? OR seller_id IS NULL) AND status = ? \
                     ORDER BY created_at DESC"
                ))
                .bind(seller_id)
                .bind(status)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, Order>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders \
                     WHERE seller_id = ? OR seller_id IS NULL \
                     ORDER BY created_at DESC"
                ))
                .bind(seller_id)
                .fetch_all(&self.db)
                .await
            }
        }
        .map_err(|e| {
            error!("❌ Failed to fetch seller {} orders: {:?}", seller_id, e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_all(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, RepositoryError> {
        let orders = match status {
            Some(status) => {
                sqlx::query_as::<_, Order>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders WHERE status = ? ORDER BY created_at DESC"
                ))
                .bind(status)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, Order>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
                ))
                .fetch_all(&self.db)
                .await
            }
        }
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }
}
