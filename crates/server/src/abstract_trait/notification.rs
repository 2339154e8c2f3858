use crate::{
    domain::response::{ApiResponse, NotificationResponse},
    model::{Notification, NotificationKind},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynNotificationRepository = Arc<dyn NotificationRepositoryTrait + Send + Sync>;
pub type DynNotificationService = Arc<dyn NotificationServiceTrait + Send + Sync>;

#[async_trait]
pub trait NotificationRepositoryTrait {
    async fn create(
        &self,
        seller_id: i64,
        kind: NotificationKind,
        message: &str,
        order_id: Option<i64>,
    ) -> Result<Notification, RepositoryError>;
    async fn find_by_seller(
        &self,
        seller_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, RepositoryError>;
    async fn mark_read(&self, id: i64) -> Result<Notification, RepositoryError>;
}

#[async_trait]
pub trait NotificationServiceTrait {
    async fn find_for_seller(
        &self,
        seller_id: i64,
        unread_only: bool,
    ) -> Result<ApiResponse<Vec<NotificationResponse>>, ServiceError>;
    async fn mark_read(
        &self,
        seller_id: i64,
        id: i64,
    ) -> Result<ApiResponse<NotificationResponse>, ServiceError>;
}
