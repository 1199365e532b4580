//! Decorator pricing over pizza components.
//!
//! # Responsibility
//! - Add topping surcharges around a base pizza without changing it.
//!
//! # Invariants
//! - Each decorator contributes a fixed additive amount; the total is
//!   the base price plus the sum of applied toppings, independent of
//!   which concrete objects carry them.

/// Priced pizza component. Implemented by the base pizza and by every
/// topping wrapper.
pub trait Pizza {
    fn price(&self) -> u32;
}

/// Base pizza, price 15.
#[derive(Debug, Default)]
pub struct VeggieMania;

impl Pizza for VeggieMania {
    fn price(&self) -> u32 {
        15
    }
}

/// Tomato topping, +7 on whatever it wraps.
#[derive(Debug)]
pub struct TomatoTopping<P: Pizza> {
    inner: P,
}

impl<P: Pizza> TomatoTopping<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Pizza> Pizza for TomatoTopping<P> {
    fn price(&self) -> u32 {
        self.inner.price() + 7
    }
}

/// Cheese topping, +10 on whatever it wraps.
#[derive(Debug)]
pub struct CheeseTopping<P: Pizza> {
    inner: P,
}

impl<P: Pizza> CheeseTopping<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Pizza> Pizza for CheeseTopping<P> {
    fn price(&self) -> u32 {
        self.inner.price() + 10
    }
}
