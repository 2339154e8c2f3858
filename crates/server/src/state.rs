use crate::{di::DependenciesInject, middleware::AdminKey};
use anyhow::Result;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub hashing: DynHashing,
    pub admin_key: AdminKey,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str, admin_api_key: &str) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let di_container =
            DependenciesInject::new(pool, hashing.clone(), jwt_config.clone());

        Ok(Self {
            jwt_config,
            hashing,
            admin_key: AdminKey(admin_api_key.to_string()),
            di_container,
        })
    }
}
