//! Catalogue smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `patternbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use patternbook_core::{instance, FurnitureStyle, Pizza, TomatoTopping, VeggieMania};

fn main() {
    println!("patternbook_core version={}", patternbook_core::core_version());
    println!("singleton id={}", instance().id());
    println!(
        "abstract_factory table={}",
        FurnitureStyle::Modern.table().use_description()
    );
    println!(
        "decorator veggie+tomato price={}",
        TomatoTopping::new(VeggieMania).price()
    );
}
