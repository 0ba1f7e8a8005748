use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use super::{ApiError, AppState};
use crate::domain::{User, UserCreate};

/// Public sign-up. Always yields a customer account; admins are seeded.
#[instrument(skip_all, fields(username = %params.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(params): Json<UserCreate>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let params = UserCreate::customer(params.username, params.email);
    let user = state.users.register(params).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
