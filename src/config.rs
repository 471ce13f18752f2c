//! Driver configuration types and builders

pub use crate::error::{BuilderError, MAX_PRINT_DENSITY};

/// Default width of the LCD enable strobe in microseconds
///
/// The HD44780 needs at least 450 ns of EN high time; slower clones and long
/// cables need more, so the default leaves generous headroom.
pub const DEFAULT_ENABLE_PULSE_US: u32 = 10;

/// Character LCD timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LcdConfig {
    /// Width of each enable pulse in microseconds
    ///
    /// [`LcdBuilder::build`] rejects zero; `ParallelInterface::new` raises a
    /// zero set here directly to 1 µs.
    pub enable_pulse_us: u32,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            enable_pulse_us: DEFAULT_ENABLE_PULSE_US,
        }
    }
}

/// Builder for [`LcdConfig`]
///
/// # Example
///
/// ```
/// use output_drivers::LcdBuilder;
///
/// let config = match LcdBuilder::new().enable_pulse_us(40).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.enable_pulse_us, 40);
/// ```
#[must_use]
#[derive(Default)]
pub struct LcdBuilder {
    config: LcdConfig,
}

impl LcdBuilder {
    /// Create a new builder with default timing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enable pulse width in microseconds
    pub fn enable_pulse_us(mut self, width_us: u32) -> Self {
        self.config.enable_pulse_us = width_us;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ZeroEnablePulse` if the pulse width is zero
    pub fn build(self) -> Result<LcdConfig, BuilderError> {
        if self.config.enable_pulse_us == 0 {
            return Err(BuilderError::ZeroEnablePulse);
        }
        Ok(self.config)
    }
}

/// Thermal printer start-up settings
///
/// These are the parameters [`ThermalPrinter::init`](crate::thermal::ThermalPrinter::init)
/// sends; everything else `init` writes is fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrinterConfig {
    /// Heating time in units of 10 µs
    pub heat_time: u8,
    /// Heating interval in units of 10 µs
    pub heat_interval: u8,
    /// Print density, 0 - 15
    pub print_density: u8,
    /// Line spacing in dots
    pub line_height: u8,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            heat_time: 80,
            heat_interval: 2,
            print_density: 15,
            line_height: 32,
        }
    }
}

/// Builder for [`PrinterConfig`]
///
/// # Example
///
/// ```
/// use output_drivers::PrinterBuilder;
///
/// let config = match PrinterBuilder::new().heat_time(120).line_height(24).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.heat_interval, 2);
/// ```
#[must_use]
#[derive(Default)]
pub struct PrinterBuilder {
    config: PrinterConfig,
}

impl PrinterBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set heating time
    pub fn heat_time(mut self, value: u8) -> Self {
        self.config.heat_time = value;
        self
    }

    /// Set heating interval
    pub fn heat_interval(mut self, value: u8) -> Self {
        self.config.heat_interval = value;
        self
    }

    /// Set print density
    pub fn print_density(mut self, value: u8) -> Self {
        self.config.print_density = value;
        self
    }

    /// Set line spacing in dots
    pub fn line_height(mut self, value: u8) -> Self {
        self.config.line_height = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidPrintDensity` if the density is above 15
    pub fn build(self) -> Result<PrinterConfig, BuilderError> {
        let density = self.config.print_density;
        if density > MAX_PRINT_DENSITY {
            return Err(BuilderError::InvalidPrintDensity { density });
        }
        Ok(self.config)
    }
}
