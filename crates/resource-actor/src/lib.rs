//! # Resource Actor
//!
//! Building blocks for type-safe, resource-oriented actor systems on Tokio.
//!
//! Each resource type (a customer, a catalog product, an order) gets its own
//! actor that owns the in-memory store for that type and processes messages
//! sequentially. Sequential processing within an actor means no locks are
//! needed for the store, and read-modify-write sequences on a single resource
//! (e.g. "decrement stock if enough is available") cannot interleave.
//!
//! The crate separates three layers:
//!
//! 1. **Entity** ([`ActorEntity`]) — the business logic: how a resource is
//!    created, updated, and what custom actions it supports.
//! 2. **Runtime** ([`ResourceActor`]) — the message loop and store.
//! 3. **Interface** ([`ResourceClient`] / [`ActorClient`]) — type-safe,
//!    cloneable handles for talking to an actor from anywhere.
//!
//! Dependencies between actors are injected late, via [`ResourceActor::run`]:
//! actors are constructed without their collaborators and receive them as a
//! `Context` when the loop starts. An order actor, for example, runs with the
//! catalog and identity clients in its context and uses them from its
//! lifecycle hooks.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: u32,
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! struct CounterCreate {
//!     start: i64,
//! }
//! #[derive(Debug)]
//! struct CounterUpdate {
//!     value: Option<i64>,
//! }
//! #[derive(Debug)]
//! enum CounterAction {
//!     Add(i64),
//! }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(value) = update.value {
//!             self.value = value;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Add(n) => {
//!                 self.value += n;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 5 }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Add(2)).await.unwrap();
//!     assert_eq!(value, 7);
//! }
//! ```
//!
//! For testing client-side logic without spawning actors, see the [`mock`]
//! module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
