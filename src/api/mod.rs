//! HTTP surface of the store.
//!
//! Handlers are thin: they resolve the caller, hand the request to a client
//! and map the outcome through [`ApiError`].

pub mod auth;
mod cart;
mod error;
mod orders;
mod products;
mod users;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

pub use auth::{Admin, Customer, HeaderUserResolver, UserResolver};
pub use error::ApiError;

use crate::app_system::StoreSystem;
use crate::clients::{CartClient, OrderClient, ProductClient, UserClient};

/// Shared by every handler. Cloning only clones channel senders.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub users: UserClient,
    pub resolver: Arc<dyn UserResolver>,
}

impl AppState {
    /// Wires the handlers to a running system, identifying callers by the
    /// [`auth::USER_ID_HEADER`] header.
    pub fn new(system: &StoreSystem) -> Self {
        Self::with_resolver(system, Arc::new(HeaderUserResolver::new(system.user_client.clone())))
    }

    pub fn with_resolver(system: &StoreSystem, resolver: Arc<dyn UserResolver>) -> Self {
        Self {
            products: system.product_client.clone(),
            carts: system.cart_client.clone(),
            orders: system.order_client.clone(),
            users: system.user_client.clone(),
            resolver,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(users::register))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/search", get(products::search_products))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/{item_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route("/api/orders", post(orders::create_order).get(orders::list_orders))
        .route("/api/orders/{id}", get(orders::get_order))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
