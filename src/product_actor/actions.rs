//! Custom actions for the product actor.
//!
//! Reservation and release are the only paths that mutate stock from outside
//! the product's own update payload. Because the actor processes messages
//! sequentially, a `Reserve` validates and decrements in one step — there is
//! no separate read that another request could interleave with.

/// Domain-specific operations on a product beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Conditionally decrements stock by `quantity`.
    ///
    /// Fails if the product is inactive, the quantity is zero, or fewer than
    /// `quantity` units are available. On success the product's current
    /// title and price are returned so the caller can snapshot them.
    Reserve { quantity: u32 },
    /// Increments stock by `quantity` (order cancellation, or rollback of an
    /// earlier reservation in the same request).
    Release { quantity: u32 },
}

/// Results from product actions — variants match 1:1 with [`ProductAction`].
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// The reservation succeeded; carries the snapshot taken at decrement
    /// time.
    Reserved(StockReservation),
    /// Stock level after the release.
    Released(u32),
}

/// Catalog state captured in the same actor message that decremented stock.
#[derive(Debug, Clone, PartialEq)]
pub struct StockReservation {
    pub title: String,
    pub price: f64,
}
