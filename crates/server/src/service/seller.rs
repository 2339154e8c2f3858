use crate::{
    abstract_trait::{DynNotificationRepository, DynSellerRepository, SellerServiceTrait},
    domain::response::{ApiResponse, SellerResponse},
    model::{NotificationKind, SellerStatus},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

/// Admin-side seller management: listing and the approve/reject switch.
pub struct SellerService {
    seller_repository: DynSellerRepository,
    notification_repository: DynNotificationRepository,
}

impl SellerService {
    pub fn new(
        seller_repository: DynSellerRepository,
        notification_repository: DynNotificationRepository,
    ) -> Self {
        Self {
            seller_repository,
            notification_repository,
        }
    }
}

#[async_trait]
impl SellerServiceTrait for SellerService {
    async fn find_all(
        &self,
        status: Option<SellerStatus>,
    ) -> Result<ApiResponse<Vec<SellerResponse>>, ServiceError> {
        let sellers = self.seller_repository.find_all(status).await?;

        Ok(ApiResponse::success(
            "Sellers",
            sellers.into_iter().map(SellerResponse::from).collect(),
        ))
    }

    async fn approve(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        let seller = self
            .seller_repository
            .update_status(id, SellerStatus::Approved)
            .await?;

        info!("Seller {} approved", id);

        let message = format!(
            "🎉 Your restaurant \"{}\" has been approved! You can now list food items.",
            seller.restaurant_name
        );
        if let Err(e) = self
            .notification_repository
            .create(seller.id, NotificationKind::System, &message, None)
            .await
        {
            error!("Failed to write approval notification: {e}");
        }

        Ok(ApiResponse::success(
            "Seller approved successfully",
            SellerResponse::from(seller),
        ))
    }

    async fn reject(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        let seller = self
            .seller_repository
            .update_status(id, SellerStatus::Rejected)
            .await?;

        info!("Seller {} rejected", id);

        Ok(ApiResponse::success(
            "Seller rejected",
            SellerResponse::from(seller),
        ))
    }
}
