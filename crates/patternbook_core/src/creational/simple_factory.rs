//! Simple factory over a closed product set.
//!
//! # Responsibility
//! - Construct furniture products from a kind tag.
//!
//! The product set is small and known at compile time, so it is modeled
//! as an enum rather than an open interface with downcasts.

use serde::{Deserialize, Serialize};

/// Closed set of product kinds the factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Table,
    Seat,
}

/// A constructed furniture product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub kind: ProductKind,
}

impl Product {
    /// Human-readable usage line for this product.
    pub fn use_description(&self) -> &'static str {
        match self.kind {
            ProductKind::Table => "Using Table",
            ProductKind::Seat => "Using Seat",
        }
    }
}

/// Creates the product matching `kind`.
pub fn create_product(kind: ProductKind) -> Product {
    Product { kind }
}
