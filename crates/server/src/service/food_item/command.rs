use crate::{
    abstract_trait::{
        DynFoodItemCommandRepository, DynFoodItemQueryRepository, DynSellerRepository,
        FoodItemCommandServiceTrait,
    },
    domain::{
        requests::{CreateFoodItemRequest, UpdateFoodItemRequest},
        response::{ApiResponse, FoodItemResponse},
    },
    model::{FoodItem, SellerStatus},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

pub struct FoodItemCommandService {
    command: DynFoodItemCommandRepository,
    query: DynFoodItemQueryRepository,
    seller_repository: DynSellerRepository,
}

impl FoodItemCommandService {
    pub fn new(
        command: DynFoodItemCommandRepository,
        query: DynFoodItemQueryRepository,
        seller_repository: DynSellerRepository,
    ) -> Self {
        Self {
            command,
            query,
            seller_repository,
        }
    }

    async fn ensure_approved(&self, seller_id: i64) -> Result<(), ServiceError> {
        let seller = self
            .seller_repository
            .find_by_id(seller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller not found".to_string()))?;

        if seller.status != SellerStatus::Approved {
            return Err(ServiceError::Forbidden(
                "Only approved sellers can list food items".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_owned(&self, seller_id: i64, id: i64) -> Result<FoodItem, ServiceError> {
        let item = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Food item not found".to_string()))?;

        if item.seller_id != seller_id {
            return Err(ServiceError::Forbidden(
                "Food item belongs to another seller".to_string(),
            ));
        }

        Ok(item)
    }
}

#[async_trait]
impl FoodItemCommandServiceTrait for FoodItemCommandService {
    async fn create(
        &self,
        seller_id: i64,
        req: &CreateFoodItemRequest,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError> {
        self.ensure_approved(seller_id).await?;

        let item = self.command.create(seller_id, req).await?;
        info!("Seller {} listed {}", seller_id, item.name);

        Ok(ApiResponse::success(
            "Food item created",
            FoodItemResponse::from(item),
        ))
    }

    async fn update(
        &self,
        seller_id: i64,
        id: i64,
        req: &UpdateFoodItemRequest,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError> {
        self.ensure_owned(seller_id, id).await?;

        let item = self.command.update(id, req).await?;

        Ok(ApiResponse::success(
            "Food item updated",
            FoodItemResponse::from(item),
        ))
    }

    async fn set_availability(
        &self,
        seller_id: i64,
        id: i64,
        is_available: bool,
    ) -> Result<ApiResponse<FoodItemResponse>, ServiceError> {
        self.ensure_owned(seller_id, id).await?;

        let item = self.command.set_availability(id, is_available).await?;

        Ok(ApiResponse::success(
            "Availability updated",
            FoodItemResponse::from(item),
        ))
    }

    async fn delete(&self, seller_id: i64, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        self.ensure_owned(seller_id, id).await?;

        self.command.delete(id).await?;
        info!("Seller {} removed food item {}", seller_id, id);

        Ok(ApiResponse::success("Food item deleted", ()))
    }
}
