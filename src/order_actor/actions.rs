//! Custom actions for the order actor.

use crate::model::{Order, OrderStatus};

/// Domain-specific operations on an order beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Advances the fulfillment state along the forward path
    /// (`pending → processing → shipped → delivered`). Any other target is
    /// rejected; in particular `cancelled` must go through [`Cancel`]
    /// (`OrderAction::Cancel`) so stock restoration cannot be skipped.
    SetStatus(OrderStatus),
    /// Cancels the order and restores every line item's quantity to its
    /// product's stock. Fails from terminal states; products deleted since
    /// the order was placed are skipped silently.
    Cancel,
}

/// Results from order actions — variants match 1:1 with [`OrderAction`].
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order after the status change.
    StatusChanged(Order),
    /// The order after cancellation.
    Cancelled(Order),
}
