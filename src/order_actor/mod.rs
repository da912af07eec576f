//! The order service: creation, fulfillment state machine, cancellation.
//!
//! The order actor depends on the identity and catalog actors; their clients
//! arrive via the injected [`OrderContext`] when the actor starts, not at
//! construction time.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{OrderAction, OrderActionResult};
pub use error::OrderError;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::model::{Order, OrderNumber};
use chrono::{DateTime, Utc};
use resource_actor::ResourceActor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Dependencies injected into the order actor's lifecycle hooks.
pub struct OrderContext {
    pub users: UserClient,
    pub products: ProductClient,
    pub numbers: Arc<OrderNumberSequence>,
}

/// Atomic sequence feeding order number generation.
///
/// Numbers combine the order's creation timestamp with a monotonically
/// increasing counter, so they stay unique under concurrent creation —
/// there is no read-count-then-format step to race on.
#[derive(Debug)]
pub struct OrderNumberSequence {
    counter: AtomicU64,
}

impl OrderNumberSequence {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Issues the next order number, e.g. `ORD-1722950400000-17`.
    pub fn next(&self, created_at: DateTime<Utc>) -> OrderNumber {
        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        OrderNumber(format!("ORD-{}-{}", created_at.timestamp_millis(), seq))
    }
}

impl Default for OrderNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a new order actor, its client, and the context to run it with.
///
/// The caller spawns `actor.run(context)`; the client is ready immediately.
pub fn new(
    users: UserClient,
    products: ProductClient,
) -> (ResourceActor<Order>, OrderClient, OrderContext) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = OrderClient::new(generic_client, users.clone(), products.clone());
    let context = OrderContext {
        users,
        products,
        numbers: Arc::new(OrderNumberSequence::new()),
    };
    (actor, client, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_numbers_are_unique_and_monotonic() {
        let sequence = OrderNumberSequence::new();
        let now = Utc::now();

        let first = sequence.next(now);
        let second = sequence.next(now);

        assert_ne!(first, second);
        assert!(first.0.starts_with(&format!("ORD-{}-", now.timestamp_millis())));
        assert!(first.0.ends_with("-1"));
        assert!(second.0.ends_with("-2"));
    }
}
