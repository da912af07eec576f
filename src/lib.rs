//! # Adminia Order Subsystem
//!
//! The order placement and fulfillment backend of Adminia: a catalog store,
//! an identity collaborator, and the order service that ties them together,
//! built as a resource-oriented actor system on Tokio.
//!
//! ## Architecture
//!
//! Every resource type runs as its own actor (see the [`resource_actor`]
//! crate): one task, one mailbox, sequential message processing. That gives
//! the subsystem its central guarantee for free — all stock mutations for a
//! product are serialized through the product actor, so order creation's
//! validate-and-decrement can never race another request.
//!
//! - [`model`] — pure domain types (`User`, `Product`, `Order`).
//! - [`user_actor`], [`product_actor`], [`order_actor`] — the `ActorEntity`
//!   implementations: CRUD hooks plus the domain actions (stock reservation
//!   and release, fulfillment transitions, cancellation).
//! - [`clients`] — typed wrappers forming the request/response boundary:
//!   create/list/get/expand/advance/cancel/delete for orders, catalog and
//!   identity operations for the collaborators.
//! - [`lifecycle`] — the [`OrderSystem`](lifecycle::OrderSystem)
//!   orchestrator and tracing setup.
//!
//! ## Order creation in one paragraph
//!
//! The order actor's `on_create` hook checks the customer exists, reserves
//! each line item against the product actor in submission order (each
//! reservation validates, decrements, and snapshots title/price in a single
//! serialized message), rolls every prior reservation back if one fails,
//! sums the snapshot subtotals into the total, assigns a unique
//! `ORD-<millis>-<seq>` number from an atomic sequence, and only then lets
//! the order into the store in state `pending`.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;
