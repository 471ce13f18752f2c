//! Hardware interface abstraction
//!
//! This module provides the transport traits the device drivers are written
//! against, together with their `embedded-hal` implementations:
//!
//! | Trait | Implementation | Hardware |
//! |-------|----------------|----------|
//! | [`LcdInterface`] | [`ParallelInterface`] | RS, EN and D4-D7 GPIO lines + delay |
//! | [`RegisterInterface`] | [`SpiInterface`] | [`SpiDevice`] (chip-select handled by the device) |
//! | [`RegisterInterface`] | [`SpiBusInterface`] | [`SpiBus`] + chip-select [`OutputPin`] |
//!
//! The thermal printer needs nothing beyond a byte sink and takes any
//! [`embedded_io::Write`] directly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use output_drivers::{RegisterInterface, SpiInterface};
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
//! let mut interface = SpiInterface::new(MockSpi);
//!
//! // Intensity register, full brightness
//! let _ = interface.write_register(0x0A, 0x0F);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::{SpiBus, SpiDevice};

use crate::config::LcdConfig;
use crate::error::InterfaceError;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the 4-bit parallel bus of an HD44780-class controller
///
/// Implement this on your own type if the LCD sits behind an I/O expander
/// or shift register instead of direct GPIO.
pub trait LcdInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Drive EN low
    ///
    /// Called once before the first nibble so the first rising edge is clean.
    fn idle_enable(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Select instruction (`false`) or data (`true`) register via RS
    fn set_register_select(&mut self, data: bool) -> InterfaceResult<(), Self::Error>;

    /// Put the low four bits of `nibble` on D4-D7 and latch them
    ///
    /// The implementation must:
    /// 1. Drive D7..D4 to bits 3..0 of `nibble`
    /// 2. Drive EN high for at least the controller's minimum pulse width
    /// 3. Drive EN low
    fn write_nibble(&mut self, nibble: u8) -> InterfaceResult<(), Self::Error>;
}

/// Trait for a register-addressed SPI peripheral
///
/// Each call is one chip-select framed transaction of two bytes.
pub trait RegisterInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Write `data` to `register`
    fn write_register(&mut self, register: u8, data: u8) -> InterfaceResult<(), Self::Error>;
}

/// GPIO implementation of [`LcdInterface`]
///
/// ## Type Parameters
///
/// * `RS` - Register select pin
/// * `EN` - Enable (strobe) pin
/// * `D4`..`D7` - Data lines, D7 carries the most significant bit
/// * `DELAY` - Delay used to time the enable pulse
///
/// All pins must share one error type.
pub struct ParallelInterface<RS, EN, D4, D5, D6, D7, DELAY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,
    /// Enable pulse width in microseconds
    enable_pulse_us: u32,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> ParallelInterface<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new ParallelInterface
    ///
    /// Pins are not touched until the driver starts its bring-up sequence.
    /// A zero pulse width in `config` is raised to 1 µs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rs: RS,
        en: EN,
        d4: D4,
        d5: D5,
        d6: D6,
        d7: D7,
        delay: DELAY,
        config: LcdConfig,
    ) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
            enable_pulse_us: config.enable_pulse_us.max(1),
        }
    }

    /// Get the enable pulse width in microseconds
    pub fn enable_pulse_us(&self) -> u32 {
        self.enable_pulse_us
    }

    /// Give back the pins and delay
    #[allow(clippy::type_complexity)]
    pub fn release(self) -> (RS, EN, D4, D5, D6, D7, DELAY) {
        (
            self.rs, self.en, self.d4, self.d5, self.d6, self.d7, self.delay,
        )
    }
}

fn bit(nibble: u8, index: u8) -> PinState {
    PinState::from(nibble & (1 << index) != 0)
}

impl<RS, EN, D4, D5, D6, D7, DELAY, PinErr> LcdInterface
    for ParallelInterface<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin<Error = PinErr>,
    EN: OutputPin<Error = PinErr>,
    D4: OutputPin<Error = PinErr>,
    D5: OutputPin<Error = PinErr>,
    D6: OutputPin<Error = PinErr>,
    D7: OutputPin<Error = PinErr>,
    DELAY: DelayNs,
    PinErr: Debug,
{
    type Error = PinErr;

    fn idle_enable(&mut self) -> InterfaceResult<(), Self::Error> {
        self.en.set_low()
    }

    fn set_register_select(&mut self, data: bool) -> InterfaceResult<(), Self::Error> {
        self.rs.set_state(PinState::from(data))
    }

    fn write_nibble(&mut self, nibble: u8) -> InterfaceResult<(), Self::Error> {
        self.d7.set_state(bit(nibble, 3))?;
        self.d6.set_state(bit(nibble, 2))?;
        self.d5.set_state(bit(nibble, 1))?;
        self.d4.set_state(bit(nibble, 0))?;

        self.en.set_high()?;
        self.delay.delay_us(self.enable_pulse_us);
        self.en.set_low()
    }
}

/// [`RegisterInterface`] over an [`SpiDevice`]
///
/// The device owns chip-select and frames each register write itself.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiInterface<SPI> {
    /// Create a new SpiInterface
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> RegisterInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, data: u8) -> InterfaceResult<(), Self::Error> {
        self.spi.write(&[register, data])
    }
}

/// [`RegisterInterface`] over a shared [`SpiBus`] and a chip-select pin
///
/// Chip-select is active low: it is asserted before the two bytes and
/// released after the bus has been flushed. The MAX7219 latches the frame on
/// that rising edge.
pub struct SpiBusInterface<BUS, CS> {
    bus: BUS,
    cs: CS,
}

impl<BUS, CS> SpiBusInterface<BUS, CS>
where
    BUS: SpiBus,
    CS: OutputPin,
{
    /// Create a new SpiBusInterface
    ///
    /// Chip-select is not driven until the first register write.
    pub fn new(bus: BUS, cs: CS) -> Self {
        Self { bus, cs }
    }

    /// Give back the bus and chip-select pin
    pub fn release(self) -> (BUS, CS) {
        (self.bus, self.cs)
    }
}

impl<BUS, CS> RegisterInterface for SpiBusInterface<BUS, CS>
where
    BUS: SpiBus,
    BUS::Error: Debug,
    CS: OutputPin,
    CS::Error: Debug,
{
    type Error = InterfaceError<BUS::Error, CS::Error>;

    fn write_register(&mut self, register: u8, data: u8) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let written = self
            .bus
            .write(&[register, data])
            .and_then(|()| self.bus.flush());
        // Release chip-select even if the transfer failed
        let released = self.cs.set_high().map_err(InterfaceError::Pin);
        written.map_err(InterfaceError::Spi)?;
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{
        D4, D5, D6, D7, EN, Event, MockDelay, MockPin, MockSpiBus, MockSpiDevice, RS, latches,
        new_log, spi_frames,
    };
    use alloc::vec;

    const CS: u8 = 10;

    fn parallel(
        log: &crate::mock::Log,
        config: LcdConfig,
    ) -> ParallelInterface<MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockDelay> {
        ParallelInterface::new(
            MockPin::new(RS, log),
            MockPin::new(EN, log),
            MockPin::new(D4, log),
            MockPin::new(D5, log),
            MockPin::new(D6, log),
            MockPin::new(D7, log),
            MockDelay::new(log),
            config,
        )
    }

    #[test]
    fn test_new_touches_no_pins() {
        let log = new_log();
        let _interface = parallel(&log, LcdConfig::default());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_write_nibble_bit_order_and_pulse() {
        let log = new_log();
        let mut interface = parallel(&log, LcdConfig::default());
        interface.write_nibble(0b1010).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Pin(D7, true),
                Event::Pin(D6, false),
                Event::Pin(D5, true),
                Event::Pin(D4, false),
                Event::Pin(EN, true),
                Event::Delay(10_000),
                Event::Pin(EN, false),
            ]
        );
    }

    #[test]
    fn test_write_nibble_ignores_high_bits() {
        let log = new_log();
        let mut interface = parallel(&log, LcdConfig::default());
        interface.write_nibble(0xF3).unwrap();

        let latched = latches(&log);
        assert_eq!(latched.len(), 1);
        assert_eq!(latched[0].nibble, 0x3);
    }

    #[test]
    fn test_configured_pulse_width() {
        let log = new_log();
        let mut interface = parallel(&log, LcdConfig { enable_pulse_us: 50 });
        assert_eq!(interface.enable_pulse_us(), 50);
        interface.write_nibble(0).unwrap();
        assert_eq!(latches(&log)[0].pulse_ns, 50_000);
    }

    #[test]
    fn test_zero_pulse_width_is_raised() {
        let log = new_log();
        let mut interface = parallel(&log, LcdConfig { enable_pulse_us: 0 });
        assert_eq!(interface.enable_pulse_us(), 1);
        interface.write_nibble(0x3).unwrap();

        let latched = latches(&log);
        assert_eq!(latched.len(), 1);
        assert_eq!(latched[0].nibble, 0x3);
        assert_eq!(latched[0].pulse_ns, 1_000);
    }

    #[test]
    fn test_register_select() {
        let log = new_log();
        let mut interface = parallel(&log, LcdConfig::default());
        interface.set_register_select(true).unwrap();
        interface.set_register_select(false).unwrap();
        interface.idle_enable().unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Pin(RS, true),
                Event::Pin(RS, false),
                Event::Pin(EN, false),
            ]
        );
    }

    #[test]
    fn test_spi_device_single_frame() {
        let log = new_log();
        let mut interface = SpiInterface::new(MockSpiDevice::new(&log));
        interface.write_register(0x0C, 0x01).unwrap();
        assert_eq!(spi_frames(&log), vec![vec![0x0C, 0x01]]);
    }

    #[test]
    fn test_spi_bus_frames_with_chip_select() {
        let log = new_log();
        let mut interface =
            SpiBusInterface::new(MockSpiBus::new(&log), MockPin::new(CS, &log));
        interface.write_register(0x03, 0x07).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Pin(CS, false),
                Event::Spi(vec![0x03, 0x07]),
                Event::Flush,
                Event::Pin(CS, true),
            ]
        );
    }

    #[test]
    fn test_spi_bus_chip_select_error() {
        let log = new_log();
        let mut interface =
            SpiBusInterface::new(MockSpiBus::new(&log), MockPin::failing(CS, &log));
        let result = interface.write_register(0x01, 0x00);
        assert!(matches!(result, Err(InterfaceError::Pin(_))));
        assert!(spi_frames(&log).is_empty());
    }

    #[test]
    fn test_spi_bus_transfer_error_releases_chip_select() {
        let log = new_log();
        let mut interface =
            SpiBusInterface::new(MockSpiBus::failing(&log), MockPin::new(CS, &log));
        let result = interface.write_register(0x01, 0x00);

        assert!(matches!(result, Err(InterfaceError::Spi(_))));
        assert_eq!(*log.borrow(), [Event::Pin(CS, false), Event::Pin(CS, true)]);
    }
}
