//! Entity trait implementation for the Product domain type.
//!
//! Includes the stock actions used by checkout. A failed `Reserve` leaves the
//! product untouched, which is what lets the framework's transactions roll
//! back a whole checkout.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductId, ProductParams, ProductSnapshot};

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductParams;
    type UpdateParams = ProductParams;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductParams) -> Result<Self, ProductError> {
        params.validate().map_err(ProductError::ValidationError)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            stock_quantity: params.stock_quantity,
        })
    }

    /// Full overwrite of every mutable field.
    fn on_update(&mut self, params: ProductParams) -> Result<(), ProductError> {
        params.validate().map_err(ProductError::ValidationError)?;
        self.name = params.name;
        self.description = params.description;
        self.price = params.price;
        self.category = params.category;
        self.stock_quantity = params.stock_quantity;
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::Reserve(quantity) => {
                if self.stock_quantity < quantity {
                    return Err(ProductError::InsufficientStock {
                        product: self.name.to_string(),
                        available: self.stock_quantity,
                        requested: quantity,
                    });
                }
                self.stock_quantity -= quantity;
                Ok(ProductActionResult::Reserve(ProductSnapshot {
                    id: self.id,
                    name: self.name.to_string(),
                    price: self.price,
                }))
            }
            ProductAction::Release(quantity) => {
                self.stock_quantity = self.stock_quantity.saturating_add(quantity);
                Ok(ProductActionResult::Release(self.stock_quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductName;
    use rust_decimal_macros::dec;

    fn lamp(stock: u32) -> Product {
        let params = ProductParams {
            name: ProductName::try_new("Lamp".to_string()).unwrap(),
            description: "Desk lamp".to_string(),
            price: dec!(10.00),
            category: "Lighting".to_string(),
            stock_quantity: stock,
        };
        Product::from_create_params(ProductId(1), params).unwrap()
    }

    #[test]
    fn test_reserve_decrements_and_snapshots_price() {
        let mut product = lamp(5);
        let result = product.handle_action(ProductAction::Reserve(2)).unwrap();
        assert_eq!(
            result,
            ProductActionResult::Reserve(ProductSnapshot {
                id: ProductId(1),
                name: "Lamp".to_string(),
                price: dec!(10.00),
            })
        );
        assert_eq!(product.stock_quantity, 3);
    }

    #[test]
    fn test_reserve_beyond_stock_fails_without_mutation() {
        let mut product = lamp(1);
        let err = product.handle_action(ProductAction::Reserve(3)).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock for product: Lamp. Available: 1, Requested: 3");
        assert_eq!(product.stock_quantity, 1);
    }

    #[test]
    fn test_release_restores_stock() {
        let mut product = lamp(0);
        assert_eq!(product.handle_action(ProductAction::Release(4)).unwrap(), ProductActionResult::Release(4));
        assert_eq!(product.stock_quantity, 4);
    }

    #[test]
    fn test_update_rejects_non_positive_price() {
        let mut product = lamp(1);
        let params = ProductParams {
            name: ProductName::try_new("Lamp".to_string()).unwrap(),
            description: String::new(),
            price: dec!(-1),
            category: String::new(),
            stock_quantity: 9,
        };
        assert!(matches!(product.on_update(params), Err(ProductError::ValidationError(_))));
    }
}
