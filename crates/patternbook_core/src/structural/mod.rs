//! Structural pattern demonstrations.
//!
//! # Responsibility
//! - Show composition patterns: bridging, nesting, decorating, facading
//!   and flyweight sharing.
//! - Errors stay local to the demonstration that produces them.

pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
