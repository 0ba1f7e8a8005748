use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::ProductClient;
use crate::domain::{AddCartItem, Cart, CartCreate, CartDto, CartId, CartItem, CartItemDto, CartItemId, ProductId, UserId};

/// Client for interacting with the Cart actor.
///
/// Every operation takes the caller's [`UserId`] explicitly and answers with
/// the cart priced against the current catalog.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    product_client: ProductClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    /// Provisions the cart for a freshly registered user.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, user_id: UserId) -> Result<CartId, CartError> {
        debug!("Sending request");
        Ok(self.inner.create(CartCreate { user_id }).await?)
    }

    /// Finds the user's cart. Carts are never created lazily.
    #[instrument(skip(self))]
    pub async fn cart_for_user(&self, user_id: UserId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .query(move |cart| cart.user_id == user_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CartError::NotFound(user_id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: UserId) -> Result<CartDto, CartError> {
        let cart = self.cart_for_user(user_id).await?;
        self.to_dto(cart).await
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, user_id: UserId, request: AddCartItem) -> Result<CartDto, CartError> {
        let quantity = u32::try_from(request.quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| CartError::ValidationError(format!("Invalid quantity: {}", request.quantity)))?;

        let cart = self.cart_for_user(user_id).await?;
        let product = self.product_client.get_product(request.product_id).await?;
        let action = CartAction::AddItem { product_id: product.id, quantity };
        let cart = self.perform(cart.id, action).await?;

        info!(cart_id = %cart.id, product_id = %product.id, quantity, "Item added to cart");
        self.to_dto(cart).await
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, user_id: UserId, item_id: CartItemId, quantity: i64) -> Result<CartDto, CartError> {
        let cart = self.cart_for_user(user_id).await?;
        let cart = self.perform(cart.id, CartAction::SetQuantity { item_id, quantity }).await?;
        self.to_dto(cart).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, user_id: UserId, item_id: CartItemId) -> Result<CartDto, CartError> {
        let cart = self.cart_for_user(user_id).await?;
        let cart = self.perform(cart.id, CartAction::RemoveItem(item_id)).await?;
        self.to_dto(cart).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: UserId) -> Result<CartDto, CartError> {
        let cart = self.cart_for_user(user_id).await?;
        let cart = self.perform(cart.id, CartAction::Clear).await?;
        Ok(CartDto::new(cart.id, Vec::new()))
    }

    /// Takes every line out of the user's cart in one step, so concurrent
    /// checkouts of the same cart cannot both see its lines. Lines whose
    /// product left the catalog are discarded. The caller owns the returned
    /// lines and must [`restore`](Self::restore) them if the order fails.
    #[instrument(skip(self))]
    pub async fn checkout(&self, user_id: UserId) -> Result<(CartId, Vec<CartItem>), CartError> {
        let cart = self.cart_for_user(user_id).await?;
        let lines = match self.inner.perform_action(cart.id, CartAction::Checkout).await? {
            CartActionResult::CheckedOut(lines) => lines,
            other => return Err(unexpected(other)),
        };
        if lines.is_empty() {
            return Ok((cart.id, lines));
        }

        let ids = lines.iter().map(|line| line.product_id).collect();
        let products = match self.product_client.products_by_id(ids).await {
            Ok(products) => products,
            Err(e) => {
                self.restore(cart.id, lines).await?;
                return Err(e.into());
            }
        };
        let (live, stale): (Vec<CartItem>, Vec<CartItem>) =
            lines.into_iter().partition(|line| products.contains_key(&line.product_id));
        for line in &stale {
            warn!(cart_id = %cart.id, product_id = %line.product_id, "Dropping cart line for a deleted product");
        }

        info!(cart_id = %cart.id, lines = live.len(), "Cart lines taken for checkout");
        Ok((cart.id, live))
    }

    /// Returns lines taken by [`checkout`](Self::checkout) to the cart.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn restore(&self, cart_id: CartId, lines: Vec<CartItem>) -> Result<(), CartError> {
        debug!("Sending request");
        self.perform(cart_id, CartAction::Restore(lines)).await?;
        Ok(())
    }

    async fn perform(&self, cart_id: CartId, action: CartAction) -> Result<Cart, CartError> {
        match self.inner.perform_action(cart_id, action).await? {
            CartActionResult::Updated(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    /// Joins each line with the current catalog entry for its product. Lines
    /// whose product was deleted are pruned from the stored cart.
    async fn to_dto(&self, mut cart: Cart) -> Result<CartDto, CartError> {
        let ids = cart.items.iter().map(|item| item.product_id).collect();
        let products = self.product_client.products_by_id(ids).await?;

        let stale: Vec<ProductId> = cart
            .items
            .iter()
            .map(|item| item.product_id)
            .filter(|product_id| !products.contains_key(product_id))
            .collect();
        if !stale.is_empty() {
            warn!(cart_id = %cart.id, count = stale.len(), "Pruning cart lines for deleted products");
            cart = self.perform(cart.id, CartAction::RemoveProducts(stale)).await?;
        }

        let items = cart
            .items
            .iter()
            .filter_map(|item| products.get(&item.product_id).map(|product| CartItemDto::new(item, product)))
            .collect();
        Ok(CartDto::new(cart.id, items))
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
