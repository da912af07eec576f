//! The contract a resource must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types tie every operation to the right payloads at compile
//! time: a `Product` actor only accepts `ProductCreate` / `ProductUpdate` /
//! `ProductAction`, never another resource's DTOs.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by any resource entity managed by a `ResourceActor`.
///
/// The trait is `#[async_trait]` so lifecycle hooks can call other actors.
/// The `Context` associated type carries those collaborators; it is injected
/// into every hook by [`ResourceActor::run`](crate::ResourceActor::run), which
/// lets the dependency graph be wired after all actors are constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be convertible from `u32` so the actor can
    /// generate IDs from its internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. reserving stock).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. `()` if none.
    type Context: Send + Sync;

    /// Per-resource error type. One enum per actor covers all of its
    /// operations; clients downcast it back out of
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the generated ID and the create payload.
    /// Runs synchronously, before `on_create`; failures here reject the
    /// request without touching the store.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is inserted into the
    /// store. The place for cross-actor validation and side effects; an error
    /// here means the entity is never persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
