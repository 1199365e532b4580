//! Creational pattern demonstrations.
//!
//! # Responsibility
//! - Show object-construction patterns over small domain models.
//! - Keep each demonstration independent; no shared state except the
//!   one-time-initialized singleton.

pub mod abstract_factory;
pub mod builder;
pub mod prototype;
pub mod simple_factory;
pub mod singleton;
