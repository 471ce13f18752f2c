//! Text output capability shared by the display drivers

use core::fmt::Debug;

/// A device that shows a line of text
///
/// Implemented by [`CharacterLcd`](crate::hd44780::CharacterLcd) and
/// [`Max7219`](crate::max7219::Max7219). What "write" means is
/// device-specific: the LCD prints at its cursor, the digit display
/// replaces all eight digits.
pub trait TextDisplay {
    /// Transport error
    type Error: Debug;

    /// Show `text`
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Blank the display
    fn clear(&mut self) -> Result<(), Self::Error>;
}
