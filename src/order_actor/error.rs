use crate::actor_framework::FrameworkError;
use crate::cart_actor::CartError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Missing order, or an order owned by someone else. Callers cannot tell
    /// the two apart.
    #[error("Order not found with id: {0}")]
    NotFound(String),
    #[error("Cannot create order from empty cart")]
    EmptyCart,
    #[error("Insufficient stock for product: {product}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Product(ProductError),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::InsufficientStock { product, available, requested } => {
                Self::InsufficientStock { product, available, requested }
            }
            other => Self::Product(other),
        }
    }
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(e: FrameworkError<OrderError>) -> Self {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => Self::NotFound(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
