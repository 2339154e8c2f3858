use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    model::{NewOrder, Order, OrderItem, OrderStatus},
    repository::order::ORDER_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn checkout(
        &self,
        cart_id: &str,
        order: &NewOrder,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        // Order rows, line rows and the cart wipe land together or not at
        // all; a half-written checkout must never survive a crash.
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to open checkout transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders
                (customer_name, customer_email, customer_phone, total_amount, status, seller_id)
            VALUES (?, ?, ?, ?, 'pending', ?)
            "#,
        )
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(order.total_amount)
        .bind(order.seller_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order: {:?}", e);
            RepositoryError::from(e)
        })?;

        let order_id = result.last_insert_id() as i64;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, food_item_id, name, price, quantity)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(item.food_item_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert order line: {:?}", e);
                RepositoryError::from(e)
            })?;
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let order_row = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
        ))
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, food_item_id, name, price, quantity \
             FROM order_items WHERE order_id = ? ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit checkout: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created order ID {} ({} lines, total {})",
            order_id,
            items.len(),
            order_row.total_amount
        );

        Ok((order_row, items))
    }

    async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status)
            .bind(order_id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
        ))
        .bind(order_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order ID {} is now {}", order_id, status);
        Ok(order)
    }
}
