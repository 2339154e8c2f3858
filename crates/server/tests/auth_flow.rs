use async_trait::async_trait;
use foodhome_server::{
    abstract_trait::{AuthServiceTrait, SellerRepositoryTrait},
    domain::requests::{AuthRequest, RegisterSellerRequest},
    model::{Seller, SellerStatus},
    service::AuthService,
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService, JwtServiceTrait},
    config::{Hashing, JwtConfig},
    errors::{RepositoryError, ServiceError},
};
use std::sync::{Arc, Mutex};

/// In-memory seller store standing in for MySQL.
#[derive(Default)]
struct InMemorySellerRepository {
    sellers: Mutex<Vec<Seller>>,
}

impl InMemorySellerRepository {
    fn with_seller(seller: Seller) -> Self {
        Self {
            sellers: Mutex::new(vec![seller]),
        }
    }
}

#[async_trait]
impl SellerRepositoryTrait for InMemorySellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, RepositoryError> {
        let sellers = self.sellers.lock().unwrap();
        Ok(sellers.iter().find(|s| s.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Seller>, RepositoryError> {
        let sellers = self.sellers.lock().unwrap();
        Ok(sellers.iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(
        &self,
        status: Option<SellerStatus>,
    ) -> Result<Vec<Seller>, RepositoryError> {
        let sellers = self.sellers.lock().unwrap();
        Ok(sellers
            .iter()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        req: &RegisterSellerRequest,
        password_hash: &str,
    ) -> Result<Seller, RepositoryError> {
        let mut sellers = self.sellers.lock().unwrap();
        if sellers.iter().any(|s| s.email == req.email) {
            return Err(RepositoryError::AlreadyExists(
                "Seller already exists with this email".to_string(),
            ));
        }

        let seller = Seller {
            id: sellers.len() as i64 + 1,
            name: req.name.clone(),
            email: req.email.clone(),
            password: password_hash.to_string(),
            restaurant_name: req.restaurant_name.clone(),
            phone: req.phone.clone(),
            address: req.address.clone(),
            status: SellerStatus::Pending,
            created_at: None,
        };
        sellers.push(seller.clone());
        Ok(seller)
    }

    async fn update_status(
        &self,
        id: i64,
        status: SellerStatus,
    ) -> Result<Seller, RepositoryError> {
        let mut sellers = self.sellers.lock().unwrap();
        let seller = sellers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepositoryError::NotFound)?;
        seller.status = status;
        Ok(seller.clone())
    }
}

fn registration(email: &str) -> RegisterSellerRequest {
    RegisterSellerRequest {
        name: "Rajesh Kumar".into(),
        email: email.into(),
        password: "secret123".into(),
        restaurant_name: "Spice Garden".into(),
        phone: "9876543210".into(),
        address: "MG Road, Hyderabad".into(),
    }
}

fn auth_service(repo: Arc<InMemorySellerRepository>) -> (AuthService, DynJwtService) {
    let jwt = Arc::new(JwtConfig::new("test-secret")) as DynJwtService;
    let hashing = Arc::new(Hashing::new()) as DynHashing;
    (AuthService::new(repo, hashing, jwt.clone()), jwt)
}

#[tokio::test]
async fn register_issues_a_verifiable_token() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, jwt) = auth_service(repo);

    let response = service.register(&registration("a@a.com")).await.unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.data.seller.email, "a@a.com");
    assert_eq!(response.data.seller.status, SellerStatus::Pending);

    let seller_id = jwt.verify_token(&response.data.token).unwrap();
    assert_eq!(seller_id, response.data.seller.id);
}

#[tokio::test]
async fn duplicate_email_registration_is_rejected_without_a_second_row() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, _) = auth_service(repo.clone());

    service.register(&registration("a@a.com")).await.unwrap();
    let err = service
        .register(&registration("a@a.com"))
        .await
        .unwrap_err();

    match err {
        ServiceError::Repo(RepositoryError::AlreadyExists(msg)) => {
            assert_eq!(msg, "Seller already exists with this email")
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }

    assert_eq!(repo.sellers.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn login_roundtrip_returns_token_for_registered_seller() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, jwt) = auth_service(repo);

    service.register(&registration("a@a.com")).await.unwrap();

    let response = service
        .login(&AuthRequest {
            email: "a@a.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();

    assert!(jwt.verify_token(&response.data.token).is_ok());
}

#[tokio::test]
async fn wrong_password_login_fails_with_invalid_credentials() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, _) = auth_service(repo);

    service.register(&registration("a@a.com")).await.unwrap();

    let err = service
        .login(&AuthRequest {
            email: "a@a.com".into(),
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidCredentials));
}

#[tokio::test]
async fn unknown_email_login_is_indistinguishable_from_wrong_password() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, _) = auth_service(repo);

    let err = service
        .login(&AuthRequest {
            email: "nobody@a.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidCredentials));
}

#[tokio::test]
async fn rejected_seller_cannot_log_in() {
    let repo = Arc::new(InMemorySellerRepository::default());
    let (service, _) = auth_service(repo.clone());

    let response = service.register(&registration("a@a.com")).await.unwrap();
    repo.update_status(response.data.seller.id, SellerStatus::Rejected)
        .await
        .unwrap();

    let err = service
        .login(&AuthRequest {
            email: "a@a.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn me_returns_profile_without_password() {
    let seller = Seller {
        id: 7,
        name: "Priya Sharma".into(),
        email: "priya@example.com".into(),
        password: "$2b$12$irrelevant".into(),
        restaurant_name: "Delicious Bites".into(),
        phone: "9876543211".into(),
        address: "Banjara Hills, Hyderabad".into(),
        status: SellerStatus::Approved,
        created_at: None,
    };
    let repo = Arc::new(InMemorySellerRepository::with_seller(seller));
    let (service, _) = auth_service(repo);

    let response = service.me(7).await.unwrap();
    assert_eq!(response.data.restaurant_name, "Delicious Bites");

    let err = service.me(99).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
