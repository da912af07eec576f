//! Domain types for the Adminia order subsystem.
//!
//! Pure data: the resource structs, their ID newtypes, and the create/update
//! payloads. Behavior lives in the `*_actor` modules.

pub mod order;
pub mod product;
pub mod user;

pub use order::{
    Order, OrderCreate, OrderId, OrderItemRequest, OrderLineItem, OrderNumber, OrderStatus,
    OrderUpdate, PaymentMethod, ShippingDetails,
};
pub use product::{Product, ProductCreate, ProductId, ProductUpdate};
pub use user::{User, UserCreate, UserId, UserUpdate};
