//! Abstract factory for matched furniture families.
//!
//! # Responsibility
//! - Produce style-consistent table/seat pairs from one factory value.
//!
//! # Invariants
//! - Products created by the same style always carry that style tag, so
//!   a factory can never emit a mixed family.

use serde::{Deserialize, Serialize};

/// Furniture family. Doubles as the factory: each style knows how to
/// create its own table and seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureStyle {
    Modern,
    Art,
}

impl FurnitureStyle {
    /// Creates a table belonging to this family.
    pub fn table(self) -> Table {
        Table { style: self }
    }

    /// Creates a seat belonging to this family.
    pub fn seat(self) -> Seat {
        Seat { style: self }
    }
}

/// A table from one furniture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub style: FurnitureStyle,
}

impl Table {
    pub fn use_description(&self) -> &'static str {
        match self.style {
            FurnitureStyle::Modern => "Use ModernTable",
            FurnitureStyle::Art => "Use ArtTable",
        }
    }
}

/// A seat from one furniture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub style: FurnitureStyle,
}

impl Seat {
    pub fn use_description(&self) -> &'static str {
        match self.style {
            FurnitureStyle::Modern => "Use ModernSeat",
            FurnitureStyle::Art => "Use ArtSeat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FurnitureStyle;

    #[test]
    fn families_stay_consistent() {
        let modern = FurnitureStyle::Modern;
        assert_eq!(modern.table().style, modern);
        assert_eq!(modern.seat().style, modern);

        let art = FurnitureStyle::Art;
        assert_eq!(art.table().use_description(), "Use ArtTable");
        assert_eq!(art.seat().use_description(), "Use ArtSeat");
    }
}
