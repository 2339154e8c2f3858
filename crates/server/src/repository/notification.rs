use crate::{
    abstract_trait::NotificationRepositoryTrait,
    model::{Notification, NotificationKind},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

const NOTIFICATION_COLUMNS: &str =
    "id, seller_id, kind, message, order_id, is_read, created_at";

#[derive(Clone)]
pub struct NotificationRepository {
    db: ConnectionPool,
}

impl NotificationRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Notification, RepositoryError> {
        sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(
        &self,
        seller_id: i64,
        kind: NotificationKind,
        message: &str,
        order_id: Option<i64>,
    ) -> Result<Notification, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO notifications (seller_id, kind, message, order_id) VALUES (?, ?, ?, ?)",
        )
        .bind(seller_id)
        .bind(kind)
        .bind(message)
        .bind(order_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create notification: {:?}", e);
            RepositoryError::from_write(e, "Notification already exists", "Unknown seller")
        })?;

        self.fetch_by_id(result.last_insert_id() as i64).await
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, RepositoryError> {
        let base = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE seller_id = ?"
        );
        let sql = if unread_only {
            format!("{base} AND is_read = FALSE ORDER BY created_at DESC")
        } else {
            format!("{base} ORDER BY created_at DESC")
        };

        let notifications = sqlx::query_as::<_, Notification>(&sql)
            .bind(seller_id)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to fetch seller {} notifications: {:?}",
                    seller_id, e
                );
                RepositoryError::from(e)
            })?;

        Ok(notifications)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, RepositoryError> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(notification)
    }

    async fn mark_read(&self, id: i64) -> Result<Notification, RepositoryError> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        self.fetch_by_id(id).await
    }
}
