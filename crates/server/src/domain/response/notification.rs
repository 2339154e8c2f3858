use crate::model::{Notification, NotificationKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct NotificationResponse {
    pub id: i64,
    pub kind: NotificationKind,
    pub message: String,
    pub order_id: Option<i64>,
    pub is_read: bool,
    pub created_at: Option<String>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        NotificationResponse {
            id: value.id,
            kind: value.kind,
            message: value.message,
            order_id: value.order_id,
            is_read: value.is_read,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
