//! [`ActorEntity`] implementation for [`User`].
//!
//! The simplest resource in the system: plain CRUD, no dependencies, no
//! custom actions.

use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &Self::Context) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), UserError> {
        Ok(())
    }
}
