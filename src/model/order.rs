use crate::model::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Human-facing order number, e.g. `ORD-1722950400000-17`.
///
/// Assigned exactly once, before the order is persisted, and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(pub String);

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an order.
///
/// The fulfillment path is `Pending → Processing → Shipped → Delivered`;
/// `Delivered` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// No transitions are defined out of a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `target` is a legal fulfillment advance from this state.
    ///
    /// Only the forward edges of the fulfillment path qualify. `Cancelled`
    /// is deliberately not reachable here: cancellation goes through
    /// [`OrderAction::Cancel`](crate::order_actor::OrderAction::Cancel),
    /// which also restores stock.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Pending, Processing) | (Processing, Shipped) | (Shipped, Delivered)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

/// Accepted payment methods. Defaults to cash on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
    Transfer,
    #[default]
    Cash,
}

/// Free-form shipping address attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

/// One product/quantity pair within an order.
///
/// `title` and `price` are captured from the catalog at reservation time and
/// never change afterwards, even if the product is later repriced, renamed,
/// or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// A customer order.
///
/// `items` and `total` are fixed at creation; afterwards only the status,
/// the notes/shipping metadata, and `updated_at` change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub number: OrderNumber,
    pub customer: UserId,
    pub items: Vec<OrderLineItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub shipping: Option<ShippingDetails>,
    pub payment: PaymentMethod,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Refreshes the last-update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// One requested line in an order creation payload.
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: UserId,
    pub items: Vec<OrderItemRequest>,
    pub shipping: Option<ShippingDetails>,
    pub payment: PaymentMethod,
    pub notes: Option<String>,
}

/// Payload for updating an order's metadata. Line items are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub notes: Option<String>,
    pub shipping: Option<ShippingDetails>,
}
