//! Recording mocks for the HAL traits used in unit tests
//!
//! Every mock appends to one shared [`Log`] so tests can assert on the exact
//! interleaving of pin levels, delays and bus traffic.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, Operation, SpiBus, SpiDevice};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Pin(u8, bool),
    Delay(u32),
    Spi(Vec<u8>),
    Flush,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl spi::Error for MockError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl embedded_io::Error for MockError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

#[derive(Debug)]
pub struct MockPin {
    id: u8,
    log: Log,
    failing: bool,
    sampled: Option<bool>,
}

impl MockPin {
    pub fn new(id: u8, log: &Log) -> Self {
        Self {
            id,
            log: log.clone(),
            failing: false,
            sampled: None,
        }
    }

    pub fn failing(id: u8, log: &Log) -> Self {
        Self {
            failing: true,
            ..Self::new(id, log)
        }
    }

    /// Level reported by `is_high`, independent of what was written
    pub fn sampling(id: u8, log: &Log, level: bool) -> Self {
        Self {
            sampled: Some(level),
            ..Self::new(id, log)
        }
    }

    fn drive(&mut self, level: bool) -> Result<(), MockError> {
        if self.failing {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Pin(self.id, level));
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.failing {
            return Err(MockError);
        }
        Ok(self.sampled.unwrap_or(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns));
    }
}

pub struct MockSpiDevice {
    log: Log,
    failing: bool,
}

impl MockSpiDevice {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            failing: false,
        }
    }

    pub fn failing(log: &Log) -> Self {
        Self {
            log: log.clone(),
            failing: true,
        }
    }
}

impl spi::ErrorType for MockSpiDevice {
    type Error = MockError;
}

impl SpiDevice for MockSpiDevice {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.failing {
            return Err(MockError);
        }
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.log.borrow_mut().push(Event::Spi(bytes.to_vec()));
            }
        }
        Ok(())
    }
}

pub struct MockSpiBus {
    log: Log,
    failing: bool,
}

impl MockSpiBus {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            failing: false,
        }
    }

    /// Bus whose writes fail without recording anything
    pub fn failing(log: &Log) -> Self {
        Self {
            log: log.clone(),
            failing: true,
        }
    }
}

impl spi::ErrorType for MockSpiBus {
    type Error = MockError;
}

impl SpiBus for MockSpiBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        if self.failing {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Spi(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Flush);
        Ok(())
    }
}

/// Serial sink that keeps every byte and can fail after a byte budget
#[derive(Debug, Default)]
pub struct MockSerial {
    pub bytes: Vec<u8>,
    pub flushes: usize,
    pub fail_after: Option<usize>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(limit: usize) -> Self {
        Self {
            fail_after: Some(limit),
            ..Self::default()
        }
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = MockError;
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if let Some(limit) = self.fail_after {
            if self.bytes.len() + buf.len() > limit {
                return Err(MockError);
            }
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Pin ids used by the LCD tests
pub const RS: u8 = 0;
pub const EN: u8 = 1;
pub const D4: u8 = 4;
pub const D5: u8 = 5;
pub const D6: u8 = 6;
pub const D7: u8 = 7;

/// One nibble as latched by the LCD on a falling edge of EN
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latch {
    pub rs: bool,
    pub nibble: u8,
    pub pulse_ns: u32,
}

/// Replay the log through a model of the HD44780 bus and return every latch
pub fn latches(log: &Log) -> Vec<Latch> {
    let mut rs = false;
    let mut en = false;
    let mut data = 0u8;
    let mut pulse_ns = 0u32;
    let mut out = Vec::new();

    for event in log.borrow().iter() {
        match *event {
            Event::Pin(RS, level) => rs = level,
            Event::Pin(EN, level) => {
                if en && !level {
                    out.push(Latch {
                        rs,
                        nibble: data,
                        pulse_ns,
                    });
                }
                if !en && level {
                    pulse_ns = 0;
                }
                en = level;
            }
            Event::Pin(id @ D4..=D7, level) => {
                let bit = 1 << (id - D4);
                if level {
                    data |= bit;
                } else {
                    data &= !bit;
                }
            }
            Event::Delay(ns) if en => pulse_ns += ns,
            _ => {}
        }
    }
    out
}

/// Pair latched nibbles into (rs, byte) transmissions, high nibble first
pub fn transmissions(log: &Log) -> Vec<(bool, u8)> {
    latches(log)
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| (pair[0].rs, (pair[0].nibble << 4) | pair[1].nibble))
        .collect()
}

/// All SPI writes in the log
pub fn spi_frames(log: &Log) -> Vec<Vec<u8>> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Spi(bytes) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}
