use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum FoodCategory {
    Veg,
    NonVeg,
    Tiffins,
    Sandwich,
    Soup,
    Others,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 6] = [
        FoodCategory::Veg,
        FoodCategory::NonVeg,
        FoodCategory::Tiffins,
        FoodCategory::Sandwich,
        FoodCategory::Soup,
        FoodCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Veg => "veg",
            FoodCategory::NonVeg => "non-veg",
            FoodCategory::Tiffins => "tiffins",
            FoodCategory::Sandwich => "sandwich",
            FoodCategory::Soup => "soup",
            FoodCategory::Others => "others",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown food category '{s}'"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodItem {
    pub id: i64,
    pub seller_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: FoodCategory,
    pub image_url: String,
    pub is_available: bool,
    pub preparation_time: i32,
    pub rating: f32,
    pub created_at: Option<NaiveDateTime>,
}

/// A menu row joined with its seller, the shape the storefront lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodItemWithSeller {
    pub id: i64,
    pub seller_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: FoodCategory,
    pub image_url: String,
    pub is_available: bool,
    pub preparation_time: i32,
    pub rating: f32,
    pub created_at: Option<NaiveDateTime>,
    pub seller_name: String,
    pub restaurant_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_parses_every_menu_section() {
        for (raw, expected) in [
            ("veg", FoodCategory::Veg),
            ("non-veg", FoodCategory::NonVeg),
            ("tiffins", FoodCategory::Tiffins),
            ("sandwich", FoodCategory::Sandwich),
            ("soup", FoodCategory::Soup),
            ("others", FoodCategory::Others),
        ] {
            assert_eq!(FoodCategory::from_str(raw).unwrap(), expected);
            assert_eq!(expected.to_string(), raw);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(FoodCategory::from_str("dessert").is_err());
        assert!(FoodCategory::from_str("Veg").is_err());
    }

    #[test]
    fn category_serializes_with_dashed_wire_name() {
        let json = serde_json::to_string(&FoodCategory::NonVeg).unwrap();
        assert_eq!(json, "\"non-veg\"");

        let parsed: FoodCategory = serde_json::from_str("\"non-veg\"").unwrap();
        assert_eq!(parsed, FoodCategory::NonVeg);
    }
}
