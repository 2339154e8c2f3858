use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Account lifecycle: registered sellers wait in `pending` until an admin
/// approves or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SellerStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SellerStatus::Pending => "pending",
            SellerStatus::Approved => "approved",
            SellerStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SellerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SellerStatus::Pending),
            "approved" => Ok(SellerStatus::Approved),
            "rejected" => Ok(SellerStatus::Rejected),
            other => Err(format!("unknown seller status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seller {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub restaurant_name: String,
    pub phone: String,
    pub address: String,
    pub status: SellerStatus,
    pub created_at: Option<NaiveDateTime>,
}
