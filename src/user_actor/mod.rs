//! The identity collaborator: customer records referenced by orders.

pub mod entity;
pub mod error;

pub use error::UserError;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new user actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = UserClient::new(generic_client);
    (actor, client)
}
