mod admin;
mod jwt;
mod validate;

pub use self::admin::{AdminKey, admin_middleware};
pub use self::jwt::auth_middleware;
pub use self::validate::ValidatedJson;
