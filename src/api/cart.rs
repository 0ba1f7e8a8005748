use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use super::{ApiError, AppState, Customer};
use crate::domain::{AddCartItem, CartDto, CartItemId, UpdateCartItem};

#[instrument(skip_all, fields(user_id = %customer.0.id))]
pub async fn get_cart(State(state): State<AppState>, customer: Customer) -> Result<Json<CartDto>, ApiError> {
    Ok(Json(state.carts.get_cart(customer.0.id).await?))
}

#[instrument(skip_all, fields(user_id = %customer.0.id, product_id = %request.product_id))]
pub async fn add_item(
    State(state): State<AppState>,
    customer: Customer,
    Json(request): Json<AddCartItem>,
) -> Result<Json<CartDto>, ApiError> {
    Ok(Json(state.carts.add_item(customer.0.id, request).await?))
}

#[instrument(skip_all, fields(user_id = %customer.0.id, item_id = %item_id))]
pub async fn update_item(
    State(state): State<AppState>,
    customer: Customer,
    Path(item_id): Path<CartItemId>,
    Json(request): Json<UpdateCartItem>,
) -> Result<Json<CartDto>, ApiError> {
    Ok(Json(state.carts.update_item(customer.0.id, item_id, request.quantity).await?))
}

#[instrument(skip_all, fields(user_id = %customer.0.id, item_id = %item_id))]
pub async fn remove_item(
    State(state): State<AppState>,
    customer: Customer,
    Path(item_id): Path<CartItemId>,
) -> Result<StatusCode, ApiError> {
    state.carts.remove_item(customer.0.id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all, fields(user_id = %customer.0.id))]
pub async fn clear_cart(State(state): State<AppState>, customer: Customer) -> Result<StatusCode, ApiError> {
    state.carts.clear_cart(customer.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
