//! Typed client wrappers — the request/response boundary of the subsystem.
//!
//! Each wrapper hides the generic message passing behind domain methods and
//! maps [`FrameworkError`](resource_actor::FrameworkError) back into the
//! resource's own error type, downcasting boxed entity errors so callers see
//! `InsufficientStock { requested, available }` rather than a string.

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::{OrderClient, OrderDetails};
pub use product_client::ProductClient;
pub use user_client::UserClient;

pub use resource_actor::ActorClient;
