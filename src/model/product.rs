use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the catalog.
///
/// `stock` is `u32`, so it can never go negative; the only decrement path is
/// the conditional reserve action handled inside the product actor.
/// Inactive products stay listed but cannot be ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
    pub active: bool,
}

/// Payload for creating a new product. New products start active.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub title: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub active: Option<bool>,
}
