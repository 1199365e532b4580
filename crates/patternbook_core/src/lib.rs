//! Catalogue of classic design-pattern implementations.
//! Each module is a self-contained demonstration over small domain objects.

pub mod creational;
pub mod logging;
pub mod structural;

pub use creational::abstract_factory::{FurnitureStyle, Seat, Table};
pub use creational::builder::{Car, CarAssembler, CarBuilder, CarManual, CarSpec, Director, ManualBuilder};
pub use creational::prototype::Node;
pub use creational::simple_factory::{create_product, Product, ProductKind};
pub use creational::singleton::{construction_count, instance, Registry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use structural::bridge::{Computer, EpsonPrinter, HpPrinter, Platform, Printer};
pub use structural::composite::Component;
pub use structural::decorator::{CheeseTopping, Pizza, TomatoTopping, VeggieMania};
pub use structural::facade::{LedgerEntry, TxnKind, WalletError, WalletFacade};
pub use structural::flyweight::{
    shared_factory, Dress, DressColor, DressError, DressFactory, DressKind, Game, Player, Team,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
