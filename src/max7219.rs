//! MAX7219 8-digit LED display driver
//!
//! [`Max7219`] drives eight 7-segment digits in Code B decode mode. Text is
//! mapped through the Code B font (`0-9`, `-`, `E`, `H`, `L`, `P` and blank);
//! bit 7 of each digit register lights that digit's decimal point.
//!
//! ## Digit layout
//!
//! Digit register 1 is the rightmost digit. [`set`](Max7219::set) takes at
//! most the first eight characters of its text and right-aligns them: the
//! last character taken lands on register 1, and digits to the left of the
//! first character are blanked.
//!
//! ## Shutdown register
//!
//! Construction finishes by writing `0x00` to the shutdown register and every
//! `set` finishes by writing `0x01` to it. Both writes are part of the wire
//! protocol this driver reproduces and are emitted unconditionally; use
//! [`set_shutdown`](Max7219::set_shutdown) to change the mode afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use output_drivers::{Max7219, SpiInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut display = match Max7219::new(SpiInterface::new(MockSpi)) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! // Dots under "P" and "L"
//! let _ = display.set("1234HELP", 0b11);
//! ```

use log::{debug, trace};

use crate::command::max7219::{
    BLANK, CODE_B_GLYPHS, DECIMAL_POINT, DECODE_ALL_CODE_B, DECODE_MODE, DIGIT_0, DIGIT_COUNT,
    DISPLAY_TEST, INTENSITY, INTENSITY_MAX, NORMAL_OPERATION, SCAN_ALL_DIGITS, SCAN_LIMIT,
    SHUTDOWN, SHUTDOWN_MODE,
};
use crate::display::TextDisplay;
use crate::interface::RegisterInterface;

type DigitResult<I> = core::result::Result<(), <I as RegisterInterface>::Error>;

/// Code B font value for `c`
///
/// Lookup is exact and case-sensitive; anything outside the font maps to
/// [`BLANK`].
///
/// ```
/// use output_drivers::max7219::glyph;
///
/// assert_eq!(glyph('7'), 0x07);
/// assert_eq!(glyph('P'), 0x0E);
/// assert_eq!(glyph('p'), 0x0F);
/// ```
pub fn glyph(c: char) -> u8 {
    CODE_B_GLYPHS
        .chars()
        .position(|g| g == c)
        .map_or(BLANK, |index| index as u8)
}

/// Driver for a MAX7219 with eight 7-segment digits
pub struct Max7219<I> {
    interface: I,
}

impl<I> Max7219<I>
where
    I: RegisterInterface,
{
    /// Configure the controller and return the driver
    ///
    /// Writes, in order: full intensity, scan limit of eight digits, Code B
    /// decode on all digits, and `0x00` to the shutdown register.
    ///
    /// # Errors
    ///
    /// Returns the interface error if any write fails; constructing again
    /// repeats all four writes.
    pub fn new(interface: I) -> Result<Self, I::Error> {
        let mut display = Self { interface };
        display.send(INTENSITY, INTENSITY_MAX)?;
        display.send(SCAN_LIMIT, SCAN_ALL_DIGITS)?;
        display.send(DECODE_MODE, DECODE_ALL_CODE_B)?;
        display.send(SHUTDOWN, SHUTDOWN_MODE)?;
        debug!("max7219: initialised");
        Ok(display)
    }

    /// Write one register
    pub fn send(&mut self, register: u8, data: u8) -> DigitResult<I> {
        trace!("max7219: reg {register:#04x} = {data:#04x}");
        self.interface.write_register(register, data)
    }

    /// Show `text` on the eight digits
    ///
    /// Bit `n` of `dot_mask` lights the decimal point of digit register
    /// `n + 1` (bit 0 is the rightmost digit). All eight digit registers are
    /// written, then `0x01` is written to the shutdown register.
    ///
    /// Positions are counted in `char`s, so any character takes one digit.
    pub fn set(&mut self, text: &str, dot_mask: u8) -> DigitResult<I> {
        let mut shown = [' '; DIGIT_COUNT];
        let mut len = 0;
        for (slot, c) in shown.iter_mut().zip(text.chars()) {
            *slot = c;
            len += 1;
        }

        for digit in 0..DIGIT_COUNT {
            let mut value = if digit < len {
                glyph(shown[len - 1 - digit])
            } else {
                BLANK
            };
            if dot_mask & (1 << digit) != 0 {
                value |= DECIMAL_POINT;
            }
            self.send(DIGIT_0 + digit as u8, value)?;
        }
        self.send(SHUTDOWN, NORMAL_OPERATION)
    }

    /// Set brightness, 0x0 - 0xF (upper bits are ignored)
    pub fn set_intensity(&mut self, level: u8) -> DigitResult<I> {
        self.send(INTENSITY, level & INTENSITY_MAX)
    }

    /// Enter (`true`) or leave (`false`) shutdown mode
    pub fn set_shutdown(&mut self, shutdown: bool) -> DigitResult<I> {
        let mode = if shutdown {
            SHUTDOWN_MODE
        } else {
            NORMAL_OPERATION
        };
        self.send(SHUTDOWN, mode)
    }

    /// Light every segment (`true`) or return to normal display (`false`)
    pub fn set_display_test(&mut self, enabled: bool) -> DigitResult<I> {
        self.send(DISPLAY_TEST, u8::from(enabled))
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I: RegisterInterface> TextDisplay for Max7219<I> {
    type Error = I::Error;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.set(text, 0)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.set("", 0)
    }
}
