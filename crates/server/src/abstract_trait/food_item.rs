use crate::{
    domain::{
        requests::{CreateFoodItemRequest, UpdateFoodItemRequest},
        response::{ApiResponse, FoodItemResponse},
    },
    model::{FoodCategory, FoodItem, FoodItemWithSeller},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynFoodItemQueryRepository = Arc<dyn FoodItemQueryRepositoryTrait + Send + Sync>;
pub type DynFoodItemCommandRepository = Arc<dyn FoodItemCommandRepositoryTrait + Send + Sync>;
pub type DynFoodItemQueryService = Arc<dyn FoodItemQueryServiceTrait + Send + Sync>;
pub type DynFoodItemCommandService = Arc<dyn FoodItemCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait FoodItemQueryRepositoryTrait {
    /// Available items joined with their seller, newest first.
    async fn find_available(&self) -> Result<Vec<FoodItemWithSeller>, RepositoryError>;
    async fn find_by_category(
        &self,
        category: FoodCategory,
    ) -> Result<Vec<FoodItemWithSeller>, RepositoryError>;
    /// Everything a seller has listed, available or not.
    async fn find_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<FoodItemWithSeller>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FoodItem>, RepositoryError>;
    async fn find_with_seller(
        &self,
        id: i64,
    ) -> Result<Option<FoodItemWithSeller>, RepositoryError>;
}

#[async_trait]
pub trait FoodItemCommandRepositoryTrait {
    async fn create(
        &self,
        seller_id: i64,
        req: &CreateFoodItemRequest,
    ) -> Result<FoodItemWithSeller, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateFoodItemRequest,
    ) -> Result<FoodItemWithSeller, RepositoryError>;
    async fn set_availability(
        &self,
        id: i64,
        is_available: bool,
    ) -> Result<FoodItemWithSeller, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait FoodItemQueryServiceTrait {
    async fn find_available(&self) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError>;
    async fn find_by_category(
        &self,
        category: FoodCategory,
    ) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError>;
    async fn find_mine(
        &self,
        seller_id: i64,
    ) -> Result<ApiResponse<Vec<FoodItemResponse>>, ServiceError>;
}

#[async_trait]
pub trait FoodItemCommandServiceTrait {
    async fn create(
        &self,
        seller_id: i64,
        req: &CreateFoodItemRequest,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError>;
    async fn update(
        &self,
        seller_id: i64,
        id: i64,
        req: &UpdateFoodItemRequest,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError>;
    async fn set_availability(
        &self,
        seller_id: i64,
        id: i64,
        is_available: bool,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError>;
    async fn delete(&self, seller_id: i64, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
