//! Cart-specific resource logic: one cart per user, merge-on-add line items.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{id_sequence, ResourceActor};
use crate::clients::{CartClient, ProductClient};
use crate::domain::Cart;

/// Creates a new Cart actor and its client. The client joins cart lines
/// against the catalog through `product_client`.
pub fn new(buffer_size: usize, product_client: ProductClient) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, id_sequence());
    (actor, CartClient::new(generic_client, product_client))
}
