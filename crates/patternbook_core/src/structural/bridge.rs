//! Bridge between computers and printers.
//!
//! # Responsibility
//! - Keep the computer abstraction independent from the printer
//!   implementation so either side can vary on its own.

/// Printing capability. Fixed implementation list: [`EpsonPrinter`] and
/// [`HpPrinter`].
pub trait Printer {
    /// Prints the current file, returning the emitted status line.
    fn print_file(&self) -> String;
}

/// Epson printer implementation.
#[derive(Debug, Default)]
pub struct EpsonPrinter;

impl Printer for EpsonPrinter {
    fn print_file(&self) -> String {
        "Printing by a EPSON Printer".to_string()
    }
}

/// HP printer implementation.
#[derive(Debug, Default)]
pub struct HpPrinter;

impl Printer for HpPrinter {
    fn print_file(&self) -> String {
        "Printing by a HP Printer".to_string()
    }
}

/// Platform tag for the computer abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Windows,
}

/// The abstraction side of the bridge: a computer that delegates
/// printing to whatever printer it currently holds.
pub struct Computer {
    platform: Platform,
    printer: Box<dyn Printer>,
}

impl Computer {
    pub fn new(platform: Platform, printer: Box<dyn Printer>) -> Self {
        Self { platform, printer }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Swaps the printer implementation at runtime.
    pub fn set_printer(&mut self, printer: Box<dyn Printer>) {
        self.printer = printer;
    }

    /// Prints through the current printer.
    pub fn print(&self) -> String {
        self.printer.print_file()
    }
}

#[cfg(test)]
mod tests {
    use super::{Computer, EpsonPrinter, HpPrinter, Platform};

    #[test]
    fn printers_swap_under_one_abstraction() {
        let mut mac = Computer::new(Platform::Mac, Box::new(HpPrinter));
        assert_eq!(mac.print(), "Printing by a HP Printer");

        mac.set_printer(Box::new(EpsonPrinter));
        assert_eq!(mac.print(), "Printing by a EPSON Printer");

        let windows = Computer::new(Platform::Windows, Box::new(HpPrinter));
        assert_eq!(windows.platform(), Platform::Windows);
        assert_eq!(windows.print(), "Printing by a HP Printer");
    }
}
