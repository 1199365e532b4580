//! Step builder and director for car assembly.
//!
//! # Responsibility
//! - Assemble cars step by step through a common `CarAssembler` seam.
//! - Let one director drive builders that produce different result types.
//!
//! # Invariants
//! - `reset` returns a builder to the empty spec; a director recipe
//!   always starts from `reset` so stale steps never leak between builds.

use serde::{Deserialize, Serialize};

/// Shared assembly state for every car result type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpec {
    pub seats: u8,
    pub engine: String,
    pub trip_computer: bool,
    pub gps: bool,
}

/// A finished car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub spec: CarSpec,
}

/// A finished car together with its owner manual. Distinct result type
/// built from the same assembly steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarManual {
    pub spec: CarSpec,
}

/// Assembly steps shared by every builder the director can drive.
pub trait CarAssembler {
    fn reset(&mut self);
    fn seats(&mut self, count: u8);
    fn engine(&mut self, engine: &str);
    fn trip_computer(&mut self);
    fn gps(&mut self);
}

/// Builds a [`Car`].
#[derive(Debug, Default)]
pub struct CarBuilder {
    spec: CarSpec,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the accumulated spec into a finished car.
    pub fn finish(&mut self) -> Car {
        Car {
            spec: std::mem::take(&mut self.spec),
        }
    }
}

impl CarAssembler for CarBuilder {
    fn reset(&mut self) {
        self.spec = CarSpec::default();
    }

    fn seats(&mut self, count: u8) {
        self.spec.seats = count;
    }

    fn engine(&mut self, engine: &str) {
        self.spec.engine = engine.to_string();
    }

    fn trip_computer(&mut self) {
        self.spec.trip_computer = true;
    }

    fn gps(&mut self) {
        self.spec.gps = true;
    }
}

/// Builds a [`CarManual`] from the same steps as [`CarBuilder`].
#[derive(Debug, Default)]
pub struct ManualBuilder {
    spec: CarSpec,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self) -> CarManual {
        CarManual {
            spec: std::mem::take(&mut self.spec),
        }
    }
}

impl CarAssembler for ManualBuilder {
    fn reset(&mut self) {
        self.spec = CarSpec::default();
    }

    fn seats(&mut self, count: u8) {
        self.spec.seats = count;
    }

    fn engine(&mut self, engine: &str) {
        self.spec.engine = engine.to_string();
    }

    fn trip_computer(&mut self) {
        self.spec.trip_computer = true;
    }

    fn gps(&mut self) {
        self.spec.gps = true;
    }
}

/// Knows the assembly recipes; works against any [`CarAssembler`].
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    /// Two seats, sport engine, trip computer, no GPS.
    pub fn make_sport_car(&self, builder: &mut dyn CarAssembler) {
        builder.reset();
        builder.seats(2);
        builder.engine("Sport engine");
        builder.trip_computer();
    }

    /// Four seats, SUV engine, GPS, no trip computer.
    pub fn make_suv(&self, builder: &mut dyn CarAssembler) {
        builder.reset();
        builder.seats(4);
        builder.engine("SUV engine");
        builder.gps();
    }
}
