use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum NotificationKind {
    NewOrder,
    StatusUpdate,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub seller_id: i64,
    pub kind: NotificationKind,
    pub message: String,
    pub order_id: Option<i64>,
    pub is_read: bool,
    pub created_at: Option<NaiveDateTime>,
}
