//! HD44780 character LCD driver
//!
//! [`CharacterLcd`] encodes instructions and character data for HD44780-class
//! controllers wired in 4-bit mode. Every byte goes out as two nibbles, high
//! nibble first, each latched by one enable pulse (see [`LcdInterface`]).
//!
//! The controller owns cursor position and display state; the driver keeps
//! none and never reads the bus back.
//!
//! ## Data mode
//!
//! [`print`](CharacterLcd::print) raises RS once and leaves it high. Any
//! instruction method lowers it again, so an instruction issued between two
//! `print` calls is safe, but a raw [`write_nibble`](LcdInterface::write_nibble)
//! on the interface is not.

use log::{debug, trace};

use crate::command::hd44780::{
    CLEAR_DISPLAY, ENTRY_MODE_NO_SHIFT, ENTRY_MODE_SHIFT, INIT_SEQUENCE, ROW_OFFSETS,
    SET_DDRAM_ADDRESS,
};
use crate::display::TextDisplay;
use crate::interface::LcdInterface;

type LcdResult<I> = core::result::Result<(), <I as LcdInterface>::Error>;

/// Driver for HD44780-class character LCDs
pub struct CharacterLcd<I> {
    interface: I,
}

impl<I> CharacterLcd<I>
where
    I: LcdInterface,
{
    /// Bring up the controller and return the driver
    ///
    /// Drives EN low, then sends the power-on sequence in
    /// [`INIT_SEQUENCE`]: reset to 8-bit twice, switch to 4-bit, 2 lines
    /// with 5x7 font, display off, clear, entry mode without shift,
    /// display on.
    ///
    /// # Errors
    ///
    /// Returns the interface error if any write fails. The controller is
    /// then in an unknown state; constructing again repeats the whole
    /// sequence.
    pub fn new(mut interface: I) -> Result<Self, I::Error> {
        interface.idle_enable()?;
        let mut lcd = Self { interface };
        for command in INIT_SEQUENCE {
            lcd.cmd(command)?;
        }
        debug!("hd44780: initialised");
        Ok(lcd)
    }

    /// Send an instruction byte (RS low)
    pub fn cmd(&mut self, command: u8) -> LcdResult<I> {
        trace!("hd44780: cmd {command:#04x}");
        self.interface.set_register_select(false)?;
        self.transmit(command)
    }

    /// Write text at the cursor
    ///
    /// Each character is sent as the low byte of its code point, which maps
    /// ASCII directly onto the controller's character ROM. A character
    /// outside the Basic Multilingual Plane is still one `char` and sends
    /// one byte.
    pub fn print(&mut self, text: &str) -> LcdResult<I> {
        self.interface.set_register_select(true)?;
        for c in text.chars() {
            self.transmit(c as u32 as u8)?;
        }
        Ok(())
    }

    /// Write raw character codes at the cursor
    ///
    /// Use this for glyphs outside ASCII, e.g. the eight CGRAM characters
    /// at codes 0-7.
    pub fn write_bytes(&mut self, codes: &[u8]) -> LcdResult<I> {
        self.interface.set_register_select(true)?;
        for &code in codes {
            self.transmit(code)?;
        }
        Ok(())
    }

    /// Clear the display and home the cursor
    pub fn clear(&mut self) -> LcdResult<I> {
        self.cmd(CLEAR_DISPLAY)
    }

    /// Shift the display with every character written
    pub fn auto_scroll(&mut self) -> LcdResult<I> {
        self.cmd(ENTRY_MODE_SHIFT)
    }

    /// Move only the cursor with every character written
    pub fn no_auto_scroll(&mut self) -> LcdResult<I> {
        self.cmd(ENTRY_MODE_NO_SHIFT)
    }

    /// Move the cursor; (0, 0) is top left
    ///
    /// The address is `ROW_OFFSETS[row] + col`, wrapping at 8 bits. Neither
    /// argument is range checked: a column past the row end lands wherever
    /// that DDRAM address is, and a row past the table contributes no
    /// offset at all, so the instruction degenerates to plain
    /// [`SET_DDRAM_ADDRESS`].
    pub fn set_cursor(&mut self, col: u8, row: u8) -> LcdResult<I> {
        let address = ROW_OFFSETS
            .get(row as usize)
            .map_or(0, |offset| offset.wrapping_add(col));
        self.cmd(SET_DDRAM_ADDRESS | address)
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn transmit(&mut self, byte: u8) -> LcdResult<I> {
        self.interface.write_nibble(byte >> 4)?;
        self.interface.write_nibble(byte & 0x0F)
    }
}

impl<I: LcdInterface> TextDisplay for CharacterLcd<I> {
    type Error = I::Error;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.print(text)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        CharacterLcd::clear(self)
    }
}
