//! System lifecycle and orchestration.
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`OrderSystem`] is the conductor: it creates the
//! actors, injects the order actor's dependencies, spawns every event loop,
//! and coordinates graceful shutdown.
//!
//! Shutdown works through channel closure: dropping the clients closes the
//! senders, each actor's `recv()` returns `None`, and the loops exit after
//! draining their mailboxes. The dependency graph (order → user/product) is
//! acyclic, so the order actor's context clones cannot keep the user and
//! product actors alive once the order actor itself has stopped.

pub mod tracing;

pub use self::tracing::setup_tracing;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::{order_actor, product_actor, user_actor};
use ::tracing::{error, info};

/// The running order management system: three actors and their clients.
pub struct OrderSystem {
    /// Client for the order actor.
    pub order_client: OrderClient,

    /// Client for the user actor.
    pub user_client: UserClient,

    /// Client for the product actor.
    pub product_client: ProductClient,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and starts the full system.
    ///
    /// Actors are constructed without dependencies, then wired at spawn
    /// time: the order actor receives the user and product clients (and the
    /// order-number sequence) through its run context.
    pub fn new() -> Self {
        let (user_actor, user_client) = user_actor::new();
        let user_handle = tokio::spawn(user_actor.run(()));

        let (product_actor, product_client) = product_actor::new();
        let product_handle = tokio::spawn(product_actor.run(()));

        let (order_actor, order_client, order_context) =
            order_actor::new(user_client.clone(), product_client.clone());
        let order_handle = tokio::spawn(order_actor.run(order_context));

        Self {
            order_client,
            user_client,
            product_client,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops all clients to close the channels, then awaits every actor
    /// task. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
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

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
