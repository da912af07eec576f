//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult, StockReservation};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            title: params.title,
            sku: params.sku,
            price: params.price,
            stock: params.stock,
            active: true,
        })
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), ProductError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    /// Stock mutations happen here, inside the actor's sequential loop, so a
    /// reservation can never race another request's view of `stock`.
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::Reserve { quantity } => {
                if quantity == 0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if !self.active {
                    return Err(ProductError::Unavailable(self.id.clone()));
                }
                if self.stock < quantity {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::Reserved(StockReservation {
                    title: self.title.clone(),
                    price: self.price,
                }))
            }
            ProductAction::Release { quantity } => {
                self.stock += quantity;
                Ok(ProductActionResult::Released(self.stock))
            }
        }
    }
}
