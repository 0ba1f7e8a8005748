use crate::domain::ProductSnapshot;

/// Custom actions for Product entities.
///
/// These actions represent stock operations performed on a product beyond
/// standard CRUD. Several of them can be submitted as one transaction.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Decrements stock by the given quantity.
    ///
    /// # Errors
    /// Fails, leaving stock untouched, if the quantity exceeds available stock.
    Reserve(u32),
    /// Returns previously reserved stock.
    Release(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Price and name at the instant of reservation.
    Reserve(ProductSnapshot),
    Release(u32),
}
