use crate::{
    abstract_trait::{DynFoodItemQueryRepository, FoodItemQueryServiceTrait},
    domain::response::{ApiResponse, FoodItemResponse, to_food_item_responses},
    model::FoodCategory,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct FoodItemQueryService {
    query: DynFoodItemQueryRepository,
}

impl FoodItemQueryService {
    pub fn new(query: DynFoodItemQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FoodItemQueryServiceTrait for FoodItemQueryService {
    async fn find_available(&self) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError> {
        let items = self.query.find_available().await?;

        Ok(ApiResponse::success(
            "Available food items",
            to_food_item_responses(items),
        ))
    }

    async fn find_by_category(
        &self,
        category: FoodCategory,
    ) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError> {
        let items = self.query.find_by_category(category).await?;

        Ok(ApiResponse::success(
            format!("Food items in {category}"),
            to_food_item_responses(items),
        ))
    }

    async fn find_mine(
        &self,
        seller_id: i64,
    ) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError> {
        let items = self.query.find_by_seller(seller_id).await?;

        Ok(ApiResponse::success(
            "Your food items",
            to_food_item_responses(items),
        ))
    }
}
