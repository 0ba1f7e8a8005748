use rust_decimal::Decimal;
use tracing::{error, info};

use crate::clients::{CartClient, OrderClient, ProductClient, UserClient};
use crate::domain::{ProductName, ProductParams, UserCreate};
use crate::{cart_actor, order_actor, product_actor, user_actor};

/// The main application system that owns every store actor.
///
/// Responsible for starting up actors, wiring clients together, and handling shutdown.
pub struct StoreSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new(channel_capacity: usize) -> Self {
        info!(channel_capacity, "Starting store system");

        // 1. Catalog first; everything else joins against it
        let (product_actor, product_client) = product_actor::new(channel_capacity);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Carts
        let (cart_actor, cart_client) = cart_actor::new(channel_capacity, product_client.clone());
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Orders (checkout orchestration lives in the client)
        let (order_actor, order_client) =
            order_actor::new(channel_capacity, cart_client.clone(), product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        // 4. Users (registration provisions carts)
        let (user_actor, user_client) = user_actor::new(channel_capacity, cart_client.clone());
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            user_client,
            product_client,
            cart_client,
            order_client,
            handles: vec![product_handle, cart_handle, order_handle, user_handle],
        }
    }

    /// Registers a demo admin and customer and stocks a small catalog.
    pub async fn seed_demo_data(&self) -> anyhow::Result<()> {
        let admin = self.user_client.register(UserCreate::admin("admin", "admin@example.com")).await?;
        let customer = self.user_client.register(UserCreate::customer("alice", "alice@example.com")).await?;

        let catalog = [
            ("Mechanical Keyboard", "Tenkeyless, brown switches", Decimal::new(8900, 2), "Peripherals", 25),
            ("Desk Lamp", "Warm white LED", Decimal::new(2450, 2), "Lighting", 40),
            ("Coffee Mug", "350 ml stoneware", Decimal::new(1000, 2), "Kitchen", 5),
        ];
        for (name, description, price, category, stock_quantity) in catalog {
            let params = ProductParams {
                name: ProductName::try_new(name.to_string())?,
                description: description.to_string(),
                price,
                category: category.to_string(),
                stock_quantity,
            };
            self.product_client.create_product(params).await?;
        }

        info!(admin_id = %admin.id, customer_id = %customer.id, "Demo data seeded");
        Ok(())
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client for them is dropped, which closes
        // their channels. Clients hold clones of each other, so all go at once.
        drop(self.order_client);
        drop(self.user_client);
        drop(self.cart_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
