use crate::model::SellerStatus;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct FindSellersQuery {
    pub status: Option<SellerStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct FindNotificationsQuery {
    #[serde(default)]
    pub unread: bool,
}
