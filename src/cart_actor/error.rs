use crate::actor_framework::FrameworkError;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found for user: {0}")]
    NotFound(String),
    #[error("Cart not found with id: {0}")]
    CartIdNotFound(String),
    #[error("Cart item not found with id: {0}")]
    ItemNotFound(String),
    #[error("Cart validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<CartError>> for CartError {
    fn from(e: FrameworkError<CartError>) -> Self {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => Self::CartIdNotFound(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cart_id_is_named_as_a_cart_id() {
        let err = CartError::from(FrameworkError::NotFound("7".to_string()));
        assert_eq!(err, CartError::CartIdNotFound("7".to_string()));
        assert_eq!(err.to_string(), "Cart not found with id: 7");
    }
}
