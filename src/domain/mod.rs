//! Business domain entities. Pure data structures with no actor-specific concerns.
//!
//! Entities reference each other only through the typed ids below; joins are
//! explicit lookups performed by the clients.

pub mod cart;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use cart::*;
pub use order::*;
pub use page::*;
pub use product::*;
pub use user::*;

/// Declares a surrogate identifier backed by a `u64` sequence.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Users.
    UserId
);
entity_id!(
    /// Type-safe identifier for Products.
    ProductId
);
entity_id!(
    /// Type-safe identifier for Carts.
    CartId
);
entity_id!(
    /// Identifier of a line inside one cart. Allocated per cart.
    CartItemId
);
entity_id!(
    /// Type-safe identifier for Orders.
    OrderId
);
entity_id!(
    /// Identifier of a line inside one order. Allocated per order.
    OrderItemId
);
