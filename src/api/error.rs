use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use super::auth::AuthError;
use crate::cart_actor::CartError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

/// Any failure a handler can surface, mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn product_status(e: &ProductError) -> StatusCode {
    match e {
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::InsufficientStock { .. } => StatusCode::CONFLICT,
        ProductError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ProductError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn cart_status(e: &CartError) -> StatusCode {
    match e {
        CartError::NotFound(_) | CartError::CartIdNotFound(_) | CartError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        CartError::ValidationError(_) => StatusCode::BAD_REQUEST,
        CartError::Product(e) => product_status(e),
        CartError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn order_status(e: &OrderError) -> StatusCode {
    match e {
        OrderError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderError::EmptyCart | OrderError::InsufficientStock { .. } => StatusCode::CONFLICT,
        OrderError::Cart(e) => cart_status(e),
        OrderError::Product(e) => product_status(e),
        OrderError::ValidationError(_) => StatusCode::BAD_REQUEST,
        OrderError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_status(e: &UserError) -> StatusCode {
    match e {
        UserError::NotFound(_) => StatusCode::NOT_FOUND,
        UserError::AlreadyExists(_) => StatusCode::CONFLICT,
        UserError::ValidationError(_) => StatusCode::BAD_REQUEST,
        UserError::Cart(e) => cart_status(e),
        UserError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Product(e) => product_status(e),
            Self::Cart(e) => cart_status(e),
            Self::Order(e) => order_status(e),
            Self::User(e) => user_status(e),
            Self::Auth(AuthError::Unauthenticated(_)) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Forbidden(_)) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_errors_keep_their_status() {
        let missing_product = ApiError::from(CartError::Product(ProductError::NotFound("4".to_string())));
        assert_eq!(missing_product.status(), StatusCode::NOT_FOUND);

        let empty = ApiError::from(OrderError::EmptyCart);
        assert_eq!(empty.status(), StatusCode::CONFLICT);

        let forbidden = ApiError::from(AuthError::Forbidden(crate::domain::Role::Admin));
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let dead_actor = ApiError::from(UserError::ActorCommunicationError("Actor closed".to_string()));
        assert_eq!(dead_actor.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
