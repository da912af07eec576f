//! Error types for the order actor.

use crate::model::{OrderStatus, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// All of these are request-scoped and recoverable; none are fatal to the
/// process. No retries happen internally — the caller decides whether to
/// resubmit.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order must contain at least one line item.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// A line item requested a zero quantity.
    #[error("Invalid quantity for {product}: must be at least 1")]
    InvalidQuantity { product: ProductId },

    /// A referenced product does not exist or is inactive.
    #[error("Product unavailable: {0}")]
    ProductUnavailable(ProductId),

    /// A line item requested more units than the catalog has.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    /// The referenced customer does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// The requested state change is not a legal transition.
    #[error("Cannot transition order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
