use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use super::{ApiError, AppState, Customer};
use crate::domain::{OrderDto, OrderId};

#[instrument(skip_all, fields(user_id = %customer.0.id))]
pub async fn create_order(State(state): State<AppState>, customer: Customer) -> Result<Json<OrderDto>, ApiError> {
    Ok(Json(state.orders.create_order(customer.0.id).await?))
}

#[instrument(skip_all, fields(user_id = %customer.0.id))]
pub async fn list_orders(State(state): State<AppState>, customer: Customer) -> Result<Json<Vec<OrderDto>>, ApiError> {
    Ok(Json(state.orders.list_orders(customer.0.id).await?))
}

#[instrument(skip_all, fields(user_id = %customer.0.id, order_id = %order_id))]
pub async fn get_order(
    State(state): State<AppState>,
    customer: Customer,
    Path(order_id): Path<OrderId>,
) -> Result<Json<OrderDto>, ApiError> {
    Ok(Json(state.orders.get_order(customer.0.id, order_id).await?))
}
