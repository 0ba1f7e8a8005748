use super::{OrderId, OrderItemId, ProductId, ProductSnapshot, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Status given to every order at checkout. Nothing transitions it afterwards.
pub const ORDER_STATUS_PROCESSING: &str = "PROCESSING";

/// A finalized purchase. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub items: Vec<OrderItem>,
}

/// One purchased line. `price_at_purchase` is fixed at checkout and never
/// recomputed from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: Decimal,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub order_date: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: Decimal,
}

impl OrderLine {
    pub fn from_snapshot(snapshot: ProductSnapshot, quantity: u32) -> Self {
        Self {
            product_id: snapshot.id,
            product_name: snapshot.name,
            quantity,
            price_at_purchase: snapshot.price,
        }
    }
}

impl Order {
    /// Assembles the order for an allocated id. Line ids run 1..=n in line
    /// order and the status starts at [`ORDER_STATUS_PROCESSING`].
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let items = params
            .lines
            .into_iter()
            .zip(1u64..)
            .map(|(line, seq)| OrderItem {
                id: OrderItemId(seq),
                product_id: line.product_id,
                product_name: line.product_name,
                quantity: line.quantity,
                price_at_purchase: line.price_at_purchase,
            })
            .collect();

        Self {
            id,
            user_id: params.user_id,
            order_date: params.order_date,
            status: ORDER_STATUS_PROCESSING.to_string(),
            items,
        }
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(OrderItem::sub_total).sum()
    }
}

impl OrderItem {
    pub fn sub_total(&self) -> Decimal {
        self.price_at_purchase * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: OrderId,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub items: Vec<OrderItemDto>,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub price_at_purchase: Decimal,
    pub quantity: u32,
    pub sub_total: Decimal,
}

impl From<&OrderItem> for OrderItemDto {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            price_at_purchase: item.price_at_purchase,
            quantity: item.quantity,
            sub_total: item.sub_total(),
        }
    }
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date,
            status: order.status.clone(),
            items: order.items.iter().map(OrderItemDto::from).collect(),
            total_price: order.total_price(),
        }
    }
}
