//! User accounts. Registering a user also provisions the user's cart.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::{id_sequence, ResourceActor};
use crate::clients::{CartClient, UserClient};
use crate::domain::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize, cart_client: CartClient) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, id_sequence());
    (actor, UserClient::new(generic_client, cart_client))
}
