use crate::{
    abstract_trait::SellerRepositoryTrait,
    domain::requests::RegisterSellerRequest,
    model::{Seller, SellerStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const SELLER_COLUMNS: &str =
    "id, name, email, password, restaurant_name, phone, address, status, created_at";

#[derive(Clone)]
pub struct SellerRepository {
    db: ConnectionPool,
}

impl SellerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Seller, RepositoryError> {
        sqlx::query_as::<_, Seller>(&format!(
            "SELECT {SELLER_COLUMNS} FROM sellers WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl SellerRepositoryTrait for SellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, RepositoryError> {
        let seller = sqlx::query_as::<_, Seller>(&format!(
            "SELECT {SELLER_COLUMNS} FROM sellers WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up seller by email: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(seller)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Seller>, RepositoryError> {
        let seller = sqlx::query_as::<_, Seller>(&format!(
            "SELECT {SELLER_COLUMNS} FROM sellers WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(seller)
    }

    async fn find_all(
        &self,
        status: Option<SellerStatus>,
    ) -> Result<Vec<Seller>, RepositoryError> {
        let sellers = match status {
            Some(status) => {
                sqlx::query_as::<_, Seller>(&format!(
                    "SELECT {SELLER_COLUMNS} FROM sellers WHERE status = ? ORDER BY created_at DESC"
                ))
                .bind(status)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, Seller>(&format!(
                    "SELECT {SELLER_COLUMNS} FROM sellers ORDER BY created_at DESC"
                ))
                .fetch_all(&self.db)
                .await
            }
        }
        .map_err(|e| {
            error!("❌ Failed to fetch sellers: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(sellers)
    }

    async fn create(
        &self,
        req: &RegisterSellerRequest,
        password_hash: &str,
    ) -> Result<Seller, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sellers (name, email, password, restaurant_name, phone, address, status)
            VALUES (?, ?, ?, ?, ?, ?, 'pending')
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(password_hash)
        .bind(&req.restaurant_name)
        .bind(&req.phone)
        .bind(&req.address)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to register seller {}: {:?}", req.email, err);
            RepositoryError::from_write(
                err,
                "Seller already exists with this email",
                "Invalid seller reference",
            )
        })?;

        let id = result.last_insert_id() as i64;
        info!("✅ Registered seller ID {} ({})", id, req.email);

        self.fetch_by_id(id).await
    }

    async fn update_status(
        &self,
        id: i64,
        status: SellerStatus,
    ) -> Result<Seller, RepositoryError> {
        sqlx::query("UPDATE sellers SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        info!("🔄 Seller ID {} is now {}", id, status);
        self.fetch_by_id(id).await
    }
}
