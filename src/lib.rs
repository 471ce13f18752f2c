//! Output Device Drivers
//!
//! Drivers for three small output peripherals, written against `embedded-hal`
//! v1.0 and `embedded-io`:
//!
//! - [`CharacterLcd`] - HD44780-class character LCDs on a 4-bit parallel bus
//! - [`Max7219`] - MAX7219 8-digit 7-segment LED displays over SPI
//! - [`ThermalPrinter`] - mini thermal receipt printers over a serial link
//!
//! plus [`DigitalPin`], an output pin with a cached toggle state.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Blocking, caller-driven: no background activity, no read-back
//! - Device bring-up sequences reproduced byte for byte
//! - Configurable LCD enable pulse width
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use output_drivers::{CharacterLcd, LcdBuilder, ParallelInterface};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (rs, en, d4, d5, d6, d7) = (MockPin, MockPin, MockPin, MockPin, MockPin, MockPin);
//! # let delay = MockDelay;
//! let config = match LcdBuilder::new().enable_pulse_us(10).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = ParallelInterface::new(rs, en, d4, d5, d6, d7, delay, config);
//!
//! let mut lcd = match CharacterLcd::new(interface) {
//!     Ok(lcd) => lcd,
//!     Err(_) => return,
//! };
//! let _ = lcd.set_cursor(0, 1);
//! let _ = lcd.print("Hello");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Command definitions
pub mod command;
/// Driver configuration types and builders
pub mod config;
/// Text output capability
pub mod display;
/// Error types for the drivers
pub mod error;
/// HD44780 character LCD driver
pub mod hd44780;
/// Hardware interface abstraction
pub mod interface;
/// MAX7219 digit display driver
pub mod max7219;
/// Digital pin with toggle state
pub mod pin;
/// Thermal printer driver
pub mod thermal;

#[cfg(test)]
mod mock;

pub use config::{DEFAULT_ENABLE_PULSE_US, LcdBuilder, LcdConfig, PrinterBuilder, PrinterConfig};
pub use display::TextDisplay;
pub use error::{BuilderError, InterfaceError, MAX_PRINT_DENSITY};
pub use hd44780::CharacterLcd;
pub use interface::{
    LcdInterface, ParallelInterface, RegisterInterface, SpiBusInterface, SpiInterface,
};
pub use max7219::Max7219;
pub use pin::DigitalPin;
pub use thermal::{Justification, ThermalPrinter};
