//! Typed clients wrapping the generic [`ResourceClient`](crate::actor_framework::ResourceClient).
//!
//! Clients are cheap to clone. Multi-store workflows (cart DTO assembly,
//! checkout, account provisioning) are orchestrated here, on the caller's
//! task, by talking to several actors in turn.

#[macro_use]
mod macros;

mod cart_client;
mod order_client;
mod product_client;
mod user_client;

pub use cart_client::CartClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
