mod command;
mod query;

pub use self::command::FoodItemCommandService;
pub use self::query::FoodItemQueryService;
