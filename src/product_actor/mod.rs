//! The catalog store: product entities with serialized stock mutation.
//!
//! Stock is the shared resource of the order subsystem. Every mutation goes
//! through this actor's mailbox, so validate-and-decrement is atomic with
//! respect to other requests.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{ProductAction, ProductActionResult, StockReservation};
pub use error::ProductError;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = ProductClient::new(generic_client);
    (actor, client)
}
