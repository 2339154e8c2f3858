use crate::{
    domain::{
        requests::{AuthRequest, RegisterSellerRequest},
        response::{ApiResponse, SellerResponse, TokenResponse},
    },
    model::{Seller, SellerStatus},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynSellerRepository = Arc<dyn SellerRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;
pub type DynSellerService = Arc<dyn SellerServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Seller>, RepositoryError>;
    async fn find_all(&self, status: Option<SellerStatus>)
    -> Result<Vec<Seller>, RepositoryError>;
    async fn create(
        &self,
        req: &RegisterSellerRequest,
        password_hash: &str,
    ) -> Result<Seller, RepositoryError>;
    async fn update_status(
        &self,
        id: i64,
        status: SellerStatus,
    ) -> Result<Seller, RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(
        &self,
        req: &RegisterSellerRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn login(&self, req: &AuthRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn me(&self, seller_id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError>;
}

/// Admin-side seller management.
#[async_trait]
pub trait SellerServiceTrait {
    async fn find_all(
        &self,
        status: Option<SellerStatus>,
    ) -> Result<ApiResponse<Vec<SellerResponse>>, ServiceError>;
    async fn approve(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError>;
    async fn reject(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError>;
}
