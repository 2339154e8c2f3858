use crate::{
    abstract_trait::{AuthServiceTrait, DynSellerRepository},
    domain::{
        requests::{AuthRequest, RegisterSellerRequest},
        response::{ApiResponse, SellerResponse, TokenResponse},
    },
    model::SellerStatus,
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::{RepositoryError, ServiceError},
};
use tracing::info;

pub struct AuthService {
    seller_repository: DynSellerRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        seller_repository: DynSellerRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            seller_repository,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterSellerRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("Registering seller {}", req.email);

        // Probe first for the friendly message; the unique index on email
        // still backstops concurrent registrations.
        if self
            .seller_repository
            .find_by_email(&req.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Seller already exists with this email".to_string(),
            )));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;
        let seller = self.seller_repository.create(req, &password_hash).await?;
        let token = self.jwt.generate_token(seller.id)?;

        Ok(ApiResponse::success(
            "Seller registered successfully",
            TokenResponse {
                token,
                seller: SellerResponse::from(seller),
            },
        ))
    }

    async fn login(&self, req: &AuthRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let seller = self
            .seller_repository
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&seller.password, &req.password)
            .await?;

        if seller.status == SellerStatus::Rejected {
            return Err(ServiceError::Forbidden(
                "Seller account has been rejected".to_string(),
            ));
        }

        let token = self.jwt.generate_token(seller.id)?;
        info!("Seller {} logged in", seller.id);

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                token,
                seller: SellerResponse::from(seller),
            },
        ))
    }

    async fn me(&self, seller_id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        let seller = self
            .seller_repository
            .find_by_id(seller_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller not found".to_string()))?;

        Ok(ApiResponse::success(
            "Seller profile",
            SellerResponse::from(seller),
        ))
    }
}
