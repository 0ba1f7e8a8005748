use crate::domain::{Cart, CartItem, CartItemId, ProductId};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a line or grows the existing line for the same product.
    AddItem { product_id: ProductId, quantity: u32 },
    /// Sets a line's quantity. Zero or negative removes the line.
    SetQuantity { item_id: CartItemId, quantity: i64 },
    RemoveItem(CartItemId),
    Clear,
    /// Drops the lines of products that left the catalog.
    RemoveProducts(Vec<ProductId>),
    /// Empties the cart and returns its lines. A second checkout racing the
    /// first finds nothing to take.
    Checkout,
    /// Returns lines taken by `Checkout` whose order did not go through.
    Restore(Vec<CartItem>),
}

/// Results from CartActions. `Checkout` answers with the taken lines, every
/// other action with the cart as it stands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    Updated(Cart),
    CheckedOut(Vec<CartItem>),
}
