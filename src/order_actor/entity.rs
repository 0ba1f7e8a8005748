use super::error::OrderError;
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Error = OrderError;

    /// Creates a new Order from its checkout lines. An order needs at least
    /// one line.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError("an order needs at least one line".to_string()));
        }
        Ok(Order::new(id, params))
    }

    /// Orders are immutable.
    fn on_update(&mut self, _update: ()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), OrderError> {
        Ok(())
    }
}
