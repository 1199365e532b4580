//! Composite value tree of products and containers.
//!
//! # Responsibility
//! - Price arbitrarily nested product/container trees uniformly.
//!
//! # Invariants
//! - Only containers hold children; a product is always a leaf.
//! - `total_value` of a container is its own value plus the totals of
//!   its children, in insertion order.

use serde::{Deserialize, Serialize};

/// A priced node: either a single product or a container of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Component {
    Product {
        value: f64,
    },
    Container {
        value: f64,
        children: Vec<Component>,
    },
}

impl Component {
    /// Creates a leaf product.
    pub fn product(value: f64) -> Self {
        Self::Product { value }
    }

    /// Creates a container with its own value (packaging cost) and
    /// initial children.
    pub fn container(value: f64, children: Vec<Component>) -> Self {
        Self::Container { value, children }
    }

    /// Adds a child to a container. Returns `false` for a leaf product,
    /// which cannot grow children.
    pub fn push(&mut self, child: Component) -> bool {
        match self {
            Self::Product { .. } => false,
            Self::Container { children, .. } => {
                children.push(child);
                true
            }
        }
    }

    /// Total value of this node and everything below it.
    pub fn total_value(&self) -> f64 {
        match self {
            Self::Product { value } => *value,
            Self::Container { value, children } => children
                .iter()
                .fold(*value, |sum, child| sum + child.total_value()),
        }
    }
}
