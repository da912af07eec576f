//! High-level API for the order actor — the operations table of the
//! subsystem's request/response boundary.
//!
//! Carries the user and product clients alongside the order client so that
//! `get_expanded` can resolve the customer and product references the way
//! the original views did.

use crate::model::{
    Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, Product, User, UserId,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// An order with its customer and product references resolved.
///
/// Expansion is best-effort: references that no longer resolve (deleted
/// customer, deleted product) are simply absent. Line items keep their own
/// snapshots regardless.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetails {
    pub order: Order,
    pub customer: Option<User>,
    pub products: Vec<Product>,
}

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    users: crate::clients::UserClient,
    products: crate::clients::ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        users: crate::clients::UserClient,
        products: crate::clients::ProductClient,
    ) -> Self {
        Self {
            inner,
            users,
            products,
        }
    }

    /// Places an order. Validation, stock reservation, and rollback all
    /// happen in the order actor's `on_create` hook.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All orders, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.inner.list().await.map_err(Self::map_error)?;
        sort_newest_first(&mut orders);
        Ok(orders)
    }

    /// A single customer's orders, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders_for_customer(
        &self,
        customer: UserId,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.inner.list().await.map_err(Self::map_error)?;
        orders.retain(|order| order.customer == customer);
        sort_newest_first(&mut orders);
        Ok(orders)
    }

    /// Fetches an order and resolves its customer and product references.
    #[instrument(skip(self))]
    pub async fn get_expanded(&self, id: OrderId) -> Result<Option<OrderDetails>, OrderError> {
        let Some(order) = self.get(id).await? else {
            return Ok(None);
        };

        let customer = match self.users.get(order.customer.clone()).await {
            Ok(user) => user,
            Err(e) => {
                warn!(customer = %order.customer, error = %e, "Customer expansion failed");
                None
            }
        };

        let mut products = Vec::with_capacity(order.items.len());
        for item in &order.items {
            match self.products.get(item.product_id.clone()).await {
                Ok(Some(product)) => products.push(product),
                Ok(None) => {}
                Err(e) => {
                    warn!(product_id = %item.product_id, error = %e, "Product expansion failed");
                }
            }
        }

        Ok(Some(OrderDetails {
            order,
            customer,
            products,
        }))
    }

    /// Updates an order's metadata (notes, shipping). Items are immutable.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Advances the fulfillment state along the forward path.
    #[instrument(skip(self))]
    pub async fn advance_status(
        &self,
        id: OrderId,
        target: OrderStatus,
    ) -> Result<Order, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::SetStatus(target))
            .await
        {
            Ok(OrderActionResult::StatusChanged(order)) => Ok(order),
            Ok(_) => unreachable!("SetStatus action must return StatusChanged result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Cancels an order, restoring every line item's stock.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, OrderError> {
        match self.inner.perform_action(id, OrderAction::Cancel).await {
            Ok(OrderActionResult::Cancelled(order)) => Ok(order),
            Ok(_) => unreachable!("Cancel action must return Cancelled result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.0.cmp(&a.id.0))
    });
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Recovers the typed `OrderError` from the boxed entity error so the
    /// caller can match on `InsufficientStock` / `InvalidTransition`
    /// directly.
    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ProductClient, UserClient};
    use crate::model::{OrderLineItem, OrderNumber, PaymentMethod, ProductId};
    use chrono::{Duration, Utc};
    use resource_actor::mock::MockClient;

    fn order_at(id: u32, minutes_ago: i64) -> Order {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Order {
            id: OrderId(id),
            number: OrderNumber(format!("ORD-0-{id}")),
            customer: UserId(1),
            items: vec![OrderLineItem {
                product_id: ProductId(1),
                title: "Widget".into(),
                price: 10.0,
                quantity: 1,
                subtotal: 10.0,
            }],
            total: 10.0,
            status: OrderStatus::Pending,
            shipping: None,
            payment: PaymentMethod::Cash,
            notes: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn client_with(order_mock: &MockClient<Order>) -> OrderClient {
        let user_mock = MockClient::<User>::new();
        let product_mock = MockClient::<Product>::new();
        OrderClient::new(
            order_mock.client(),
            UserClient::new(user_mock.client()),
            ProductClient::new(product_mock.client()),
        )
    }

    #[tokio::test]
    async fn test_list_orders_sorts_newest_first() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![order_at(1, 30), order_at(3, 5), order_at(2, 10)]);

        let client = client_with(&mock);
        let orders = client.list_orders().await.unwrap();

        let ids: Vec<u32> = orders.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_orders_for_customer_filters() {
        let mut other = order_at(2, 1);
        other.customer = UserId(9);

        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![order_at(1, 2), other]);

        let client = client_with(&mock);
        let orders = client.list_orders_for_customer(UserId(1)).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, OrderId(1));
        mock.verify();
    }

    #[tokio::test]
    async fn test_cancel_recovers_typed_invalid_transition() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidTransition {
                    from: OrderStatus::Delivered,
                    to: OrderStatus::Cancelled,
                },
            )));

        let client = client_with(&mock);
        let err = client.cancel_order(OrderId(1)).await.unwrap_err();

        assert_eq!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Cancelled,
            }
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_advance_status_returns_updated_order() {
        let mut advanced = order_at(1, 0);
        advanced.status = OrderStatus::Processing;

        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(1))
            .return_ok(OrderActionResult::StatusChanged(advanced.clone()));

        let client = client_with(&mock);
        let order = client
            .advance_status(OrderId(1), OrderStatus::Processing)
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Processing);
        mock.verify();
    }
}
