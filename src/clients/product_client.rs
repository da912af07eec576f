//! High-level API for the product actor.
//!
//! Wraps a `ResourceClient<Product>` and exposes the catalog operations the
//! order service consumes: conditional reservation, compensating release,
//! and stock inspection.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockReservation};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
        {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Conditionally decrements stock by `quantity`.
    ///
    /// Returns the title/price snapshot taken in the same actor message as
    /// the decrement. Fails with `InsufficientStock`, `Unavailable`, or
    /// `NotFound` without touching the stock.
    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<StockReservation, ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::Reserve { quantity })
            .await
        {
            Ok(ProductActionResult::Reserved(snapshot)) => Ok(snapshot),
            Ok(_) => unreachable!("Reserve action must return Reserved result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Increments stock by `quantity` (cancellation or rollback). Returns
    /// the new stock level.
    #[instrument(skip(self))]
    pub async fn release(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Releasing {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::Release { quantity })
            .await
        {
            Ok(ProductActionResult::Released(level)) => Ok(level),
            Ok(_) => unreachable!("Release action must return Released result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Recovers the typed `ProductError` from the boxed entity error so
    /// callers can match on `InsufficientStock` with its numbers intact.
    fn map_error(e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
