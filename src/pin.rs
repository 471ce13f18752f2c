//! Digital pin with a cached toggle state
//!
//! [`DigitalPin`] wraps an `embedded-hal` pin and forces it low as soon as it
//! is constructed, so a freshly bound line never floats at an unknown level.
//!
//! ## Toggle cache
//!
//! [`toggle`](DigitalPin::toggle) flips a cached flag and writes it. The flag
//! is only changed by `toggle`: calling [`write`](DigitalPin::write),
//! [`set`](DigitalPin::set) or [`clear`](DigitalPin::clear) in between leaves
//! the cache out of step with the line. The next `toggle` then writes the
//! inverse of the cache, not the inverse of the line.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use output_drivers::DigitalPin;
//!
//! # struct Led;
//! # impl embedded_hal::digital::ErrorType for Led { type Error = Infallible; }
//! # impl OutputPin for Led {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut led = match DigitalPin::new(Led) {
//!     Ok(led) => led,
//!     Err(_) => return,
//! };
//! let _ = led.toggle();
//! assert!(led.is_toggled_on());
//! ```

use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Output pin with a cached toggle state
#[derive(Debug)]
pub struct DigitalPin<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> DigitalPin<P> {
    /// Bind to a pin and drive it low
    ///
    /// # Errors
    ///
    /// Returns the pin error if the initial write fails.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, on: false })
    }

    /// Drive the pin high
    pub fn set(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    /// Drive the pin low
    pub fn clear(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    /// Drive the pin to `state` (`bool` or [`PinState`])
    pub fn write(&mut self, state: impl Into<PinState>) -> Result<(), P::Error> {
        self.pin.set_state(state.into())
    }

    /// Flip the cached state and write it
    ///
    /// The cache is not updated by the other write methods; see the
    /// module documentation.
    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.on = !self.on;
        self.write(self.on)
    }

    /// The cached toggle state (not the line level)
    pub fn is_toggled_on(&self) -> bool {
        self.on
    }

    /// Give back the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin + InputPin> DigitalPin<P> {
    /// Sample the line level
    pub fn read(&mut self) -> Result<bool, P::Error> {
        self.pin.is_high()
    }
}
