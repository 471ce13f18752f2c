//! Error types for the drivers
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and for transports composed of several HAL peripherals ([`InterfaceError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`InterfaceError`] - Low-level SPI/GPIO communication errors
//!
//! Drivers over a single peripheral return that peripheral's own error type:
//! [`DigitalPin`](crate::pin::DigitalPin) returns the pin error and
//! [`ThermalPrinter`](crate::thermal::ThermalPrinter) the serial error.
//!
//! ## Example
//!
//! ```
//! use output_drivers::{BuilderError, LcdBuilder, PrinterBuilder};
//!
//! let result = LcdBuilder::new().enable_pulse_us(0).build();
//! assert!(matches!(result, Err(BuilderError::ZeroEnablePulse)));
//!
//! let result = PrinterBuilder::new().print_density(16).build();
//! assert!(matches!(result, Err(BuilderError::InvalidPrintDensity { density: 16 })));
//! ```

use core::fmt::Debug;

/// Highest print density accepted by the printer (packed into a nibble)
pub const MAX_PRINT_DENSITY: u8 = 15;

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before a driver is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// The LCD enable pulse width was set to zero
    ///
    /// The controller latches data on the falling edge of EN; the pulse
    /// must last at least the datasheet's minimum width.
    ZeroEnablePulse,
    /// Print density does not fit in four bits
    InvalidPrintDensity {
        /// Density requested
        density: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroEnablePulse => write!(f, "Enable pulse width must be non-zero"),
            Self::InvalidPrintDensity { density } => write!(
                f,
                "Invalid print density {density} (max {MAX_PRINT_DENSITY})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
