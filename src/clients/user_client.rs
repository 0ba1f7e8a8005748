use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::CartClient;
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    cart_client: CartClient,
}

impl_get_method!(UserClient, User, UserError, get_user);

impl UserClient {
    pub fn new(inner: ResourceClient<User>, cart_client: CartClient) -> Self {
        Self { inner, cart_client }
    }

    /// Creates the account and provisions its cart. If the cart cannot be
    /// created the account is removed again.
    #[instrument(skip(self), fields(username = %params.username))]
    pub async fn register(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let username = params.username.trim().to_string();
        let taken = self
            .inner
            .query(move |user| user.username.eq_ignore_ascii_case(&username))
            .await?;
        if !taken.is_empty() {
            return Err(UserError::AlreadyExists(params.username.trim().to_string()));
        }

        let user_id = self.inner.create(params).await?;
        if let Err(e) = self.cart_client.create_cart(user_id).await {
            error!(user_id = %user_id, error = %e, "Cart provisioning failed, removing user");
            if let Err(e) = self.inner.delete(user_id).await {
                error!(user_id = %user_id, error = %e, "User removal failed");
            }
            return Err(e.into());
        }

        info!(user_id = %user_id, "User registered");
        self.get_user(user_id).await
    }
}
