//! Catalog product and the parameters used to create and overwrite it.
//!
//! [`Product`] implements the [`Entity`](crate::actor_framework::Entity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
//! Its custom actions live in [`crate::product_actor::ProductAction`].

use super::ProductId;
use nutype::nutype;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, Display, AsRef, Serialize, Deserialize, TryFrom)
)]
pub struct ProductName(String);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub stock_quantity: u32,
}

/// Mutable fields of a product. Used for creation and for full-overwrite updates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductParams {
    pub name: ProductName,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    pub stock_quantity: u32,
}

impl ProductParams {
    /// Checks the invariants the type system does not already carry.
    pub fn validate(&self) -> Result<(), String> {
        if self.price <= Decimal::ZERO {
            return Err(format!("Price must be positive, got {}", self.price));
        }
        Ok(())
    }
}

/// Price and name of a product as seen at the moment its stock was reserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// Case-insensitive substring filter over name and category.
/// Absent criteria match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearch {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl ProductSearch {
    pub fn matches(&self, product: &Product) -> bool {
        fn contains(haystack: &str, needle: &Option<String>) -> bool {
            needle
                .as_ref()
                .map_or(true, |needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
        }
        contains(product.name.as_ref(), &self.name) && contains(&product.category, &self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: ProductId(1),
            name: ProductName::try_new(name.to_string()).unwrap(),
            description: String::new(),
            price: dec!(1.00),
            category: category.to_string(),
            stock_quantity: 1,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_and_combinable() {
        let keyboard = product("Mechanical Keyboard", "Peripherals");

        let by_name = ProductSearch { name: Some("keyB".into()), category: None };
        assert!(by_name.matches(&keyboard));

        let both = ProductSearch { name: Some("board".into()), category: Some("PERIPH".into()) };
        assert!(both.matches(&keyboard));

        let wrong_category = ProductSearch { name: Some("board".into()), category: Some("audio".into()) };
        assert!(!wrong_category.matches(&keyboard));

        assert!(ProductSearch::default().matches(&keyboard));
    }

    #[test]
    fn test_name_is_trimmed_and_required() {
        assert_eq!(ProductName::try_new("  Lamp ".to_string()).unwrap().as_ref(), "Lamp");
        assert!(ProductName::try_new("   ".to_string()).is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        let mut params = ProductParams {
            name: ProductName::try_new("Lamp".to_string()).unwrap(),
            description: String::new(),
            price: dec!(0),
            category: String::new(),
            stock_quantity: 0,
        };
        assert!(params.validate().is_err());
        params.price = dec!(0.01);
        assert!(params.validate().is_ok());
    }
}
