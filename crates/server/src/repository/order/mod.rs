mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

pub(crate) const ORDER_COLUMNS: &str = "id, customer_name, customer_email, customer_phone, \
     total_amount, status, seller_id, created_at, updated_at";
