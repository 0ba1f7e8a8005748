//! Order ledger. Orders are append-only; checkout orchestration lives in
//! [`OrderClient::create_order`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::{id_sequence, ResourceActor};
use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::domain::Order;

/// Creates a new Order actor and its client.
pub fn new(
    buffer_size: usize,
    cart_client: CartClient,
    product_client: ProductClient,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, id_sequence());
    (actor, OrderClient::new(generic_client, cart_client, product_client))
}
