use crate::{
    abstract_trait::{DynNotificationRepository, NotificationServiceTrait},
    domain::response::{ApiResponse, NotificationResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct NotificationService {
    notification_repository: DynNotificationRepository,
}

impl NotificationService {
    pub fn new(notification_repository: DynNotificationRepository) -> Self {
        Self {
            notification_repository,
        }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn find_for_seller(
        &self,
        seller_id: i64,
        unread_only: bool,
    ) -> Result<ApiResponse<Vec<NotificationResponse>>, ServiceError> {
        let notifications = self
            .notification_repository
            .find_by_seller(seller_id, unread_only)
            .await?;

        Ok(ApiResponse::success(
            "Notifications",
            notifications
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
        ))
    }

    async fn mark_read(
        &self,
        seller_id: i64,
        id: i64,
    ) -> Result<ApiResponse<NotificationResponse>, ServiceError> {
        let notification = self
            .notification_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Notification not found".to_string()))?;

        if notification.seller_id != seller_id {
            return Err(ServiceError::Forbidden(
                "Notification belongs to another seller".to_string(),
            ));
        }

        let notification = self.notification_repository.mark_read(id).await?;

        Ok(ApiResponse::success(
            "Notification marked as read",
            NotificationResponse::from(notification),
        ))
    }
}
