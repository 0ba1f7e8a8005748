use super::{CartId, CartItemId, Product, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's in-progress selection. Exactly one per user.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    next_item_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for provisioning a cart alongside a new account.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub user_id: UserId,
}

impl Cart {
    pub fn new(id: CartId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            items: Vec::new(),
            next_item_seq: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a line, or grows the existing line for the same product.
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<CartItemId, String> {
        if let Some(existing) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| format!("Quantity overflow for product {}", product_id))?;
            return Ok(existing.id);
        }

        let id = CartItemId(self.next_item_seq);
        self.next_item_seq += 1;
        self.items.push(CartItem { id, product_id, quantity });
        Ok(id)
    }

    /// Sets a line's quantity; zero or less drops the line.
    /// Returns `false` when no line has that id.
    pub fn set_quantity(&mut self, item_id: CartItemId, quantity: u32) -> bool {
        let Some(position) = self.items.iter().position(|item| item.id == item_id) else {
            return false;
        };
        if quantity == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = quantity;
        }
        true
    }

    pub fn remove_item(&mut self, item_id: CartItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Empties the cart and hands back its lines in cart order.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    /// Puts lines taken by [`take_items`](Self::take_items) back in front of
    /// anything added since. A line for a product added again in the meantime
    /// absorbs the newer line's quantity.
    pub fn restore(&mut self, lines: Vec<CartItem>) {
        let mut items = Vec::with_capacity(lines.len() + self.items.len());
        for mut line in lines {
            if let Some(position) = self.items.iter().position(|item| item.product_id == line.product_id) {
                let newer = self.items.remove(position);
                line.quantity = line.quantity.saturating_add(newer.quantity);
            }
            items.push(line);
        }
        items.append(&mut self.items);
        self.items = items;
    }

    /// Drops every line for the given products. Returns how many went.
    pub fn remove_products(&mut self, product_ids: &[ProductId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !product_ids.contains(&item.product_id));
        before - self.items.len()
    }
}

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: CartId,
    pub items: Vec<CartItemDto>,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub sub_total: Decimal,
}

impl CartItemDto {
    pub fn new(item: &CartItem, product: &Product) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: product.name.to_string(),
            price: product.price,
            quantity: item.quantity,
            sub_total: product.price * Decimal::from(item.quantity),
        }
    }
}

impl CartDto {
    pub fn new(id: CartId, items: Vec<CartItemDto>) -> Self {
        let total_price = items.iter().map(|item| item.sub_total).sum();
        Self { id, items, total_price }
    }
}

/// Body of `POST /api/cart/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body of `PUT /api/cart/items/{itemId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartItem {
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        let first = cart.add_item(ProductId(7), 2).unwrap();
        let second = cart.add_item(ProductId(7), 3).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_item_ids_are_not_reused_after_removal() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        let a = cart.add_item(ProductId(1), 1).unwrap();
        assert!(cart.remove_item(a));
        let b = cart.add_item(ProductId(1), 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        let a = cart.add_item(ProductId(1), 4).unwrap();
        let b = cart.add_item(ProductId(2), 1).unwrap();

        assert!(cart.set_quantity(a, 0));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, b);
        assert!(!cart.set_quantity(a, 3));
    }

    #[test]
    fn test_restore_puts_taken_lines_back_first() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        let lamp = cart.add_item(ProductId(1), 2).unwrap();
        cart.add_item(ProductId(2), 1).unwrap();

        let taken = cart.take_items();
        assert!(cart.is_empty());

        cart.add_item(ProductId(3), 1).unwrap();
        cart.add_item(ProductId(1), 5).unwrap();
        cart.restore(taken);

        let lines: Vec<(ProductId, u32)> = cart.items.iter().map(|item| (item.product_id, item.quantity)).collect();
        assert_eq!(lines, vec![(ProductId(1), 7), (ProductId(2), 1), (ProductId(3), 1)]);
        assert_eq!(cart.items[0].id, lamp);
    }

    #[test]
    fn test_remove_products_drops_matching_lines() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        cart.add_item(ProductId(1), 1).unwrap();
        cart.add_item(ProductId(2), 1).unwrap();
        cart.add_item(ProductId(3), 1).unwrap();

        assert_eq!(cart.remove_products(&[ProductId(2), ProductId(9)]), 1);
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn test_merge_overflow_is_rejected() {
        let mut cart = Cart::new(CartId(1), UserId(1));
        cart.add_item(ProductId(1), u32::MAX).unwrap();
        assert!(cart.add_item(ProductId(1), 1).is_err());
        assert_eq!(cart.items[0].quantity, u32::MAX);
    }
}
