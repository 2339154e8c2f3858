use crate::{
    abstract_trait::CartRepositoryTrait,
    model::{CartItem, NewCartItem},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn create_cart(&self) -> Result<String, RepositoryError> {
        let cart_id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO carts (id) VALUES (?)")
            .bind(&cart_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create cart: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("🛒 Created cart {}", cart_id);
        Ok(cart_id)
    }

    async fn cart_exists(&self, cart_id: &str) -> Result<bool, RepositoryError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM carts WHERE id = ?")
            .bind(cart_id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row.is_some())
    }

    async fn items(&self, cart_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT id, cart_id, food_item_id, seller_id, name, price, quantity, image_url, category
            FROM cart_items
            WHERE cart_id = ?
            ORDER BY id
            "#,
        )
        .bind(cart_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart {} items: {:?}", cart_id, e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn upsert_item(
        &self,
        cart_id: &str,
        item: &NewCartItem,
    ) -> Result<(), RepositoryError> {
        // UNIQUE(cart_id, food_item_id) turns a second add of the same item
        // into a quantity bump instead of a duplicate line.
        sqlx::query(
            r#"
            INSERT INTO cart_items
                (cart_id, food_item_id, seller_id, name, price, quantity, image_url, category)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE quantity = quantity + ?
            "#,
        )
        .bind(cart_id)
        .bind(item.food_item_id)
        .bind(item.seller_id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .bind(&item.image_url)
        .bind(item.category)
        .bind(item.quantity)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to add item to cart {}: {:?}", cart_id, e);
            RepositoryError::from_write(e, "Cart line already exists", "Cart not found")
        })?;

        info!(
            "🛒 Cart {} + {} x{}",
            cart_id, item.food_item_id, item.quantity
        );
        Ok(())
    }

    async fn set_quantity(
        &self,
        cart_id: &str,
        food_item_id: i64,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE cart_items SET quantity = ? WHERE cart_id = ? AND food_item_id = ?")
                .bind(quantity)
                .bind(cart_id)
                .bind(food_item_id)
                .execute(&self.db)
                .await
                .map_err(RepositoryError::from)?;

        // Setting the quantity it already has is fine; only a missing line
        // is an error, so probe when nothing changed.
        if result.rows_affected() == 0 {
            let exists: Option<(i64,)> = sqlx::query_as(
                "SELECT 1 FROM cart_items WHERE cart_id = ? AND food_item_id = ?",
            )
            .bind(cart_id)
            .bind(food_item_id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

            if exists.is_none() {
                return Err(RepositoryError::NotFound);
            }
        }

        Ok(())
    }

    async fn remove_item(
        &self,
        cart_id: &str,
        food_item_id: i64,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("DELETE FROM cart_items WHERE cart_id = ? AND food_item_id = ?")
                .bind(cart_id)
                .bind(food_item_id)
                .execute(&self.db)
                .await
                .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn clear(&self, cart_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        info!("🛒 Cleared cart {}", cart_id);
        Ok(())
    }
}
