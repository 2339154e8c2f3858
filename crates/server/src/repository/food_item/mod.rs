mod command;
mod query;

pub use self::command::FoodItemCommandRepository;
pub use self::query::FoodItemQueryRepository;

/// The storefront listing shape: menu row plus the seller it belongs to.
pub(crate) const JOINED_SELECT: &str = r#"
    SELECT
        fi.id, fi.seller_id, fi.name, fi.description, fi.price, fi.category,
        fi.image_url, fi.is_available, fi.preparation_time, fi.rating, fi.created_at,
        s.name AS seller_name, s.restaurant_name
    FROM food_items fi
    JOIN sellers s ON fi.seller_id = s.id
"#;
