use crate::{
    abstract_trait::FoodItemQueryRepositoryTrait,
    model::{FoodCategory, FoodItem, FoodItemWithSeller},
    repository::food_item::JOINED_SELECT,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct FoodItemQueryRepository {
    db: ConnectionPool,
}

impl FoodItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodItemQueryRepositoryTrait for FoodItemQueryRepository {
    async fn find_available(&self) -> Result<Vec<FoodItemWithSeller>, RepositoryError> {
        info!("🔍 Fetching available food items");

        let items = sqlx::query_as::<_, FoodItemWithSeller>(&format!(
            "{JOINED_SELECT} WHERE fi.is_available = TRUE ORDER BY fi.created_at DESC"
        ))
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch food items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_by_category(
        &self,
        category: FoodCategory,
    ) -> Result<Vec<FoodItemWithSeller>, RepositoryError> {
        info!("🔍 Fetching food items in category {}", category);

        let items = sqlx::query_as::<_, FoodItemWithSeller>(&format!(
            "{JOINED_SELECT} WHERE fi.category = ? AND fi.is_available = TRUE ORDER BY fi.created_at DESC"
        ))
        .bind(category)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {}: {:?}", category, e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<FoodItemWithSeller>, RepositoryError> {
        let items = sqlx::query_as::<_, FoodItemWithSeller>(&format!(
            "{JOINED_SELECT} WHERE fi.seller_id = ? ORDER BY fi.created_at DESC"
        ))
        .bind(seller_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch seller {} items: {:?}", seller_id, e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FoodItem>, RepositoryError> {
        let item = sqlx::query_as::<_, FoodItem>(
            r#"
            SELECT id, seller_id, name, description, price, category,
                   image_url, is_available, preparation_time, rating, created_at
            FROM food_items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn find_with_seller(
        &self,
        id: i64,
    ) -> Result<Option<FoodItemWithSeller>, RepositoryError> {
        let item = sqlx::query_as::<_, FoodItemWithSeller>(&format!(
            "{JOINED_SELECT} WHERE fi.id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }
}
