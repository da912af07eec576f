//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creation is all-or-nothing: items are reserved against the catalog in
//! submission order, and the first failure rolls back every reservation
//! already applied in the same request before the error surfaces. The order
//! is inserted into the store only after `on_create` succeeds, so a rejected
//! order leaves no trace.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::OrderContext;
use crate::clients::ActorClient;
use crate::model::{
    Order, OrderCreate, OrderId, OrderLineItem, OrderNumber, OrderStatus, OrderUpdate, ProductId,
};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::{debug, warn};

/// Compensating increments for reservations already applied in a request
/// that failed partway through.
async fn undo_reservations(ctx: &OrderContext, reserved: &[(ProductId, u32)]) {
    for (product_id, quantity) in reserved {
        if let Err(e) = ctx.products.release(product_id.clone(), *quantity).await {
            warn!(%product_id, quantity, error = %e, "Rollback release failed");
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    /// Structural validation only; nothing has touched the catalog yet when
    /// this rejects.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(bad) = params.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::InvalidQuantity {
                product: bad.product_id.clone(),
            });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            // Assigned in on_create, once the reservations have succeeded.
            number: OrderNumber(String::new()),
            customer: params.customer,
            items: params
                .items
                .into_iter()
                .map(|item| OrderLineItem {
                    product_id: item.product_id,
                    title: String::new(),
                    price: 0.0,
                    quantity: item.quantity,
                    subtotal: 0.0,
                })
                .collect(),
            total: 0.0,
            status: OrderStatus::Pending,
            shipping: params.shipping,
            payment: params.payment,
            notes: params.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validates the customer, reserves stock item by item, snapshots the
    /// catalog state into the line items, computes the total, and assigns
    /// the order number.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        // Presence check only; identity is otherwise opaque to orders.
        let customer = ctx
            .users
            .get(self.customer.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if customer.is_none() {
            return Err(OrderError::InvalidUser(self.customer.to_string()));
        }

        let mut reserved: Vec<(ProductId, u32)> = Vec::with_capacity(self.items.len());
        for item in &mut self.items {
            match ctx
                .products
                .reserve(item.product_id.clone(), item.quantity)
                .await
            {
                Ok(snapshot) => {
                    item.title = snapshot.title;
                    item.price = snapshot.price;
                    item.subtotal = snapshot.price * item.quantity as f64;
                    reserved.push((item.product_id.clone(), item.quantity));
                }
                Err(e) => {
                    undo_reservations(ctx, &reserved).await;
                    return Err(match e {
                        ProductError::NotFound(_) | ProductError::Unavailable(_) => {
                            OrderError::ProductUnavailable(item.product_id.clone())
                        }
                        ProductError::InsufficientStock {
                            requested,
                            available,
                        } => OrderError::InsufficientStock {
                            product: item.product_id.clone(),
                            requested,
                            available,
                        },
                        other => OrderError::ActorCommunicationError(other.to_string()),
                    });
                }
            }
        }

        self.total = self.items.iter().map(|item| item.subtotal).sum();
        self.number = ctx.numbers.next(self.created_at);
        Ok(())
    }

    /// Line items and total are immutable; updates touch metadata only.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(shipping) = update.shipping {
            self.shipping = Some(shipping);
        }
        self.touch();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SetStatus(target) => {
                if !self.status.can_advance_to(target) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: target,
                    });
                }
                self.status = target;
                self.touch();
                Ok(OrderActionResult::StatusChanged(self.clone()))
            }
            OrderAction::Cancel => {
                if self.status.is_terminal() {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: OrderStatus::Cancelled,
                    });
                }
                for item in &self.items {
                    match ctx
                        .products
                        .release(item.product_id.clone(), item.quantity)
                        .await
                    {
                        Ok(_) => {}
                        // The product was deleted after the order was placed;
                        // there is no stock record left to restore.
                        Err(ProductError::NotFound(_)) => {
                            debug!(product_id = %item.product_id, "Skipping restore for deleted product");
                        }
                        Err(e) => {
                            return Err(OrderError::ActorCommunicationError(e.to_string()));
                        }
                    }
                }
                self.status = OrderStatus::Cancelled;
                self.touch();
                Ok(OrderActionResult::Cancelled(self.clone()))
            }
        }
    }
}
