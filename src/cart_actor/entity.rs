use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate, CartId};

impl Entity for Cart {
    type Id = CartId;
    type CreateParams = CartCreate;
    type UpdateParams = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.user_id))
    }

    /// Carts change only through actions.
    fn on_update(&mut self, _update: ()) -> Result<(), CartError> {
        Ok(())
    }

    /// Carts are never deleted, only cleared.
    fn on_delete(&self) -> Result<(), CartError> {
        Err(CartError::ValidationError(format!("cart {} cannot be deleted", self.id)))
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem { product_id, quantity } => {
                if quantity == 0 {
                    return Err(CartError::ValidationError("Quantity must be at least 1".to_string()));
                }
                self.add_item(product_id, quantity).map_err(CartError::ValidationError)?;
            }
            CartAction::SetQuantity { item_id, quantity } => {
                let quantity = if quantity <= 0 {
                    0
                } else {
                    u32::try_from(quantity)
                        .map_err(|_| CartError::ValidationError(format!("Quantity {} is too large", quantity)))?
                };
                if !self.set_quantity(item_id, quantity) {
                    return Err(CartError::ItemNotFound(item_id.to_string()));
                }
            }
            CartAction::RemoveItem(item_id) => {
                if !self.remove_item(item_id) {
                    return Err(CartError::ItemNotFound(item_id.to_string()));
                }
            }
            CartAction::Clear => self.clear(),
            CartAction::RemoveProducts(product_ids) => {
                self.remove_products(&product_ids);
            }
            CartAction::Checkout => return Ok(CartActionResult::CheckedOut(self.take_items())),
            CartAction::Restore(lines) => self.restore(lines),
        }
        Ok(CartActionResult::Updated(self.clone()))
    }
}
