//! Mini thermal receipt printer driver
//!
//! [`ThermalPrinter`] writes ESC/POS escape sequences to a serial link. The
//! printer is never queried: every formatting attribute is write-only, and
//! [`init`](ThermalPrinter::init) re-asserts all of them so the driver starts
//! from a known state.
//!
//! ## Init sequence
//!
//! | Step | Bytes (defaults) |
//! |------|------------------|
//! | reset | `27 64` |
//! | heat time / interval | `27 55 7 80 2` |
//! | print density | `18 35 255` |
//! | wake | `27 61 1` |
//! | justify left | `27 97 0` |
//! | inverse off | `29 66 0 10` |
//! | double height off | `27 20` |
//! | line height | `27 51 32` |
//! | bold off | `27 69 0` |
//! | underline off | `27 45 0 10` |
//! | normal size | `29 33 0 10` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use output_drivers::{PrinterConfig, ThermalPrinter};
//! # use core::convert::Infallible;
//! # struct Uart;
//! # impl embedded_io::ErrorType for Uart { type Error = Infallible; }
//! # impl embedded_io::Write for Uart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut printer = match ThermalPrinter::new(Uart, PrinterConfig::default()) {
//!     Ok(printer) => printer,
//!     Err(_) => return,
//! };
//! let _ = printer.println("Hello World!");
//! ```

use embedded_io::Write;
use log::{debug, trace};

use crate::command::thermal::{
    BOLD_OFF, DENSITY_BREAK_TIME, DOUBLE_HEIGHT_OFF, HEAT_CONTROL, HEAT_MAX_DOTS, INVERSE_OFF,
    JUSTIFY, LF, LINE_HEIGHT, PRINT_DENSITY, RESET, SIZE_NORMAL, UNDERLINE_OFF, WAKE,
};
use crate::config::PrinterConfig;

type PrinterResult<W> = core::result::Result<(), <W as embedded_io::ErrorType>::Error>;

/// Horizontal alignment of printed lines
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Justification {
    /// Flush left
    #[default]
    Left = 0,
    /// Centered
    Center = 1,
    /// Flush right
    Right = 2,
}

/// Driver for serial mini thermal printers
pub struct ThermalPrinter<W> {
    serial: W,
    config: PrinterConfig,
}

impl<W> ThermalPrinter<W>
where
    W: Write,
{
    /// Create the driver and run [`init`](Self::init) once
    ///
    /// # Errors
    ///
    /// Returns the serial error if any write fails. The printer may then be
    /// half-configured; constructing again repeats the full sequence.
    pub fn new(serial: W, config: PrinterConfig) -> Result<Self, W::Error> {
        let mut printer = Self { serial, config };
        printer.init()?;
        Ok(printer)
    }

    /// Send the full start-up sequence
    ///
    /// Numeric parameters come from the [`PrinterConfig`] given to
    /// [`new`](Self::new).
    pub fn init(&mut self) -> PrinterResult<W> {
        let config = self.config;
        self.reset()?;
        self.set_heat_time(config.heat_time, config.heat_interval)?;
        self.set_print_density(config.print_density)?;
        self.wake()?;
        self.justify(Justification::Left)?;
        self.inverse_off()?;
        self.double_height_off()?;
        self.set_line_height(config.line_height)?;
        self.bold_off()?;
        self.underline_off()?;
        self.set_size()?;
        debug!("thermal: initialised");
        Ok(())
    }

    /// Reset the printer to its power-on settings (ESC @)
    pub fn reset(&mut self) -> PrinterResult<W> {
        self.command(&RESET)
    }

    /// Set heating time and interval, both in units of 10 µs
    ///
    /// Longer heat time prints darker but slower; a longer interval prints
    /// more clearly but slower.
    pub fn set_heat_time(&mut self, heat_time: u8, heat_interval: u8) -> PrinterResult<W> {
        self.command(&HEAT_CONTROL)?;
        self.command(&[HEAT_MAX_DOTS, heat_time, heat_interval])
    }

    /// Set print density (high nibble) with the fixed break time (low nibble)
    ///
    /// Only the low four bits of `density` fit; higher bits are shifted out.
    pub fn set_print_density(&mut self, density: u8) -> PrinterResult<W> {
        self.command(&PRINT_DENSITY)?;
        self.command(&[(density << 4) | DENSITY_BREAK_TIME])
    }

    /// Wake the printer from sleep
    pub fn wake(&mut self) -> PrinterResult<W> {
        self.command(&WAKE)
    }

    /// Set line alignment
    pub fn justify(&mut self, justification: Justification) -> PrinterResult<W> {
        self.command(&JUSTIFY)?;
        self.command(&[justification as u8])
    }

    /// Turn white-on-black printing off
    pub fn inverse_off(&mut self) -> PrinterResult<W> {
        self.command(&INVERSE_OFF)
    }

    /// Turn double-height characters off
    pub fn double_height_off(&mut self) -> PrinterResult<W> {
        self.command(&DOUBLE_HEIGHT_OFF)
    }

    /// Set line spacing in dots
    pub fn set_line_height(&mut self, height: u8) -> PrinterResult<W> {
        self.command(&LINE_HEIGHT)?;
        self.command(&[height])
    }

    /// Turn bold off
    pub fn bold_off(&mut self) -> PrinterResult<W> {
        self.command(&BOLD_OFF)
    }

    /// Turn underline off
    pub fn underline_off(&mut self) -> PrinterResult<W> {
        self.command(&UNDERLINE_OFF)
    }

    /// Select the normal character size
    pub fn set_size(&mut self) -> PrinterResult<W> {
        self.command(&SIZE_NORMAL)
    }

    /// Print text as-is; nothing is appended
    pub fn print(&mut self, text: &str) -> PrinterResult<W> {
        self.serial.write_all(text.as_bytes())
    }

    /// Print text followed by a line feed
    pub fn println(&mut self, text: &str) -> PrinterResult<W> {
        self.print(text)?;
        self.serial.write_all(&[LF])
    }

    /// Send raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) -> PrinterResult<W> {
        self.serial.write_all(bytes)
    }

    /// Flush the serial link
    pub fn flush(&mut self) -> PrinterResult<W> {
        self.serial.flush()
    }

    /// Access the configuration used by [`init`](Self::init)
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Give back the serial link
    pub fn release(self) -> W {
        self.serial
    }

    fn command(&mut self, bytes: &[u8]) -> PrinterResult<W> {
        trace!("thermal: {bytes:?}");
        self.serial.write_all(bytes)
    }
}
