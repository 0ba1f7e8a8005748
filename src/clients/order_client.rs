use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::{CartClient, ProductClient};
use crate::domain::{CartId, CartItem, Order, OrderCreate, OrderDto, OrderId, OrderLine, ProductId, UserId};
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
///
/// This client orchestrates checkout: it takes the cart's lines, reserves
/// stock in a single product-store transaction and records the order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient, product_client: ProductClient) -> Self {
        Self {
            inner,
            cart_client,
            product_client,
        }
    }

    /// Converts the user's cart into an order.
    ///
    /// The cart's lines are taken out of the cart first, so the same cart can
    /// only be checked out once. Stock for all lines is then checked and
    /// decremented in one atomic step, so either every line is reserved or
    /// none is. If a later step fails, reserved stock is released and the
    /// lines go back into the cart.
    #[instrument(skip(self))]
    pub async fn create_order(&self, user_id: UserId) -> Result<OrderDto, OrderError> {
        info!("Processing create_order request");

        // Step 1: Take the cart's lines
        let (cart_id, lines) = self.cart_client.checkout(user_id).await?;
        if lines.is_empty() {
            warn!(cart_id = %cart_id, "Checkout rejected, cart is empty");
            return Err(OrderError::EmptyCart);
        }

        // Step 2: Reserve stock for every line
        let reservations: Vec<(ProductId, u32)> = lines.iter().map(|line| (line.product_id, line.quantity)).collect();
        let snapshots = match self.product_client.reserve_all(reservations.clone()).await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                error!(error = %e, "Stock reservation failed");
                self.return_lines(cart_id, lines).await;
                return Err(e.into());
            }
        };
        info!(lines = snapshots.len(), "Stock reserved successfully");

        // Step 3: Record the order at reservation prices
        let order_lines = snapshots
            .into_iter()
            .zip(&lines)
            .map(|(snapshot, line)| OrderLine::from_snapshot(snapshot, line.quantity))
            .collect();
        let params = OrderCreate {
            user_id,
            order_date: Utc::now(),
            lines: order_lines,
        };
        let order_id = match self.inner.create(params.clone()).await {
            Ok(order_id) => order_id,
            Err(e) => {
                error!(error = %e, "Order insert failed, releasing reserved stock");
                if let Err(release_error) = self.product_client.release_all(reservations).await {
                    error!(error = %release_error, "Stock release failed");
                }
                self.return_lines(cart_id, lines).await;
                return Err(e.into());
            }
        };
        info!(order_id = %order_id, "Order created successfully");

        Ok(OrderDto::from(&Order::new(order_id, params)))
    }

    async fn return_lines(&self, cart_id: CartId, lines: Vec<CartItem>) {
        if let Err(e) = self.cart_client.restore(cart_id, lines).await {
            error!(cart_id = %cart_id, error = %e, "Failed to return lines to cart");
        }
    }

    /// All orders of one user, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, user_id: UserId) -> Result<Vec<OrderDto>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.query(move |order| order.user_id == user_id).await?;
        Ok(orders.iter().map(OrderDto::from).collect())
    }

    /// One order, visible only to its owner. A foreign order is reported
    /// exactly like a missing one.
    #[instrument(skip(self))]
    pub async fn get_order(&self, user_id: UserId, order_id: OrderId) -> Result<OrderDto, OrderError> {
        debug!("Sending request");
        match self.inner.get(order_id).await? {
            Some(order) if order.user_id == user_id => Ok(OrderDto::from(&order)),
            Some(_) => {
                debug!("Order belongs to another user");
                Err(OrderError::NotFound(order_id.to_string()))
            }
            None => Err(OrderError::NotFound(order_id.to_string())),
        }
    }
}
