//! Caller identity. Authentication itself is an outside concern; handlers only
//! see the resolved [`User`] through the [`Customer`] and [`Admin`] extractors.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use thiserror::Error;
use tracing::debug;

use super::{ApiError, AppState};
use crate::clients::UserClient;
use crate::domain::{Role, User, UserId};
use crate::user_actor::UserError;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Authentication required: {0}")]
    Unauthenticated(String),
    #[error("Access denied: requires role {0:?}")]
    Forbidden(Role),
}

/// Resolves the caller of a request, or fails if there is none.
#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Result<User, ApiError>;
}

/// Trusts the `x-user-id` header set by an upstream authenticating proxy and
/// looks the user up in the user store.
pub struct HeaderUserResolver {
    users: UserClient,
}

impl HeaderUserResolver {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserResolver for HeaderUserResolver {
    async fn resolve(&self, headers: &HeaderMap) -> Result<User, ApiError> {
        let raw = headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AuthError::Unauthenticated(format!("missing {} header", USER_ID_HEADER)))?;
        let id = raw
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .ok_or_else(|| AuthError::Unauthenticated(format!("malformed {} header", USER_ID_HEADER)))?;

        match self.users.get_user(UserId(id)).await {
            Ok(user) => Ok(user),
            Err(UserError::NotFound(_)) => {
                debug!(user_id = id, "Unknown caller");
                Err(AuthError::Unauthenticated("unknown user".to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

async fn resolve_with_role(parts: &Parts, state: &AppState, role: Role) -> Result<User, ApiError> {
    let user = state.resolver.resolve(&parts.headers).await?;
    if user.role != role {
        debug!(user_id = %user.id, "Caller lacks required role");
        return Err(AuthError::Forbidden(role).into());
    }
    Ok(user)
}

/// An authenticated caller holding the `CUSTOMER` role.
#[derive(Debug, Clone)]
pub struct Customer(pub User);

impl FromRequestParts<AppState> for Customer {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_with_role(parts, state, Role::Customer).await.map(Self)
    }
}

/// An authenticated caller holding the `ADMIN` role.
#[derive(Debug, Clone)]
pub struct Admin(pub User);

impl FromRequestParts<AppState> for Admin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_with_role(parts, state, Role::Admin).await.map(Self)
    }
}
