use crate::{
    abstract_trait::FoodItemCommandRepositoryTrait,
    domain::requests::{CreateFoodItemRequest, UpdateFoodItemRequest},
    model::FoodItemWithSeller,
    repository::food_item::JOINED_SELECT,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct FoodItemCommandRepository {
    db: ConnectionPool,
}

impl FoodItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_with_seller(&self, id: i64) -> Result<FoodItemWithSeller, RepositoryError> {
        sqlx::query_as::<_, FoodItemWithSeller>(&format!("{JOINED_SELECT} WHERE fi.id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl FoodItemCommandRepositoryTrait for FoodItemCommandRepository {
    async fn create(
        &self,
        seller_id: i64,
        req: &CreateFoodItemRequest,
    ) -> Result<FoodItemWithSeller, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO food_items
                (seller_id, name, description, price, category, image_url, preparation_time, rating)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(seller_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category)
        .bind(&req.image_url)
        .bind(req.preparation_time)
        .bind(req.rating)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create food item {}: {:?}", req.name, err);
            RepositoryError::from_write(err, "Food item already exists", "Unknown seller")
        })?;

        let id = result.last_insert_id() as i64;
        info!("✅ Created food item ID {} ({})", id, req.name);

        self.fetch_with_seller(id).await
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateFoodItemRequest,
    ) -> Result<FoodItemWithSeller, RepositoryError> {
        // MySQL reports changed rows, not matched rows, so a same-values
        // update legitimately affects 0; existence comes from the re-fetch.
        sqlx::query(
            r#"
            UPDATE food_items
            SET name = ?,
                description = ?,
                price = ?,
                category = ?,
                image_url = ?,
                preparation_time = ?,
                rating = ?
            WHERE id = ?
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category)
        .bind(&req.image_url)
        .bind(req.preparation_time)
        .bind(req.rating)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update food item ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated food item ID {}", id);
        self.fetch_with_seller(id).await
    }

    async fn set_availability(
        &self,
        id: i64,
        is_available: bool,
    ) -> Result<FoodItemWithSeller, RepositoryError> {
        sqlx::query("UPDATE food_items SET is_available = ? WHERE id = ?")
            .bind(is_available)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        info!("🔄 Food item ID {} available = {}", id, is_available);
        self.fetch_with_seller(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM food_items WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted food item ID {}", id);
        Ok(())
    }
}
