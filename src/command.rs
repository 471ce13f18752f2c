//! Command definitions
//!
//! This module defines the instruction bytes, register addresses and escape
//! sequences understood by the three supported controllers. Each controller
//! family lives in its own submodule.
//!
//! ## Example
//!
//! ```
//! use output_drivers::command::{hd44780, max7219, thermal};
//!
//! assert_eq!(hd44780::CLEAR_DISPLAY, 0x01);
//! assert_eq!(max7219::SCAN_LIMIT, 0x0B);
//! assert_eq!(thermal::WAKE, [27, 61, 1]);
//! ```

/// HD44780 instruction set (4-bit interface)
///
/// Instructions are sent with RS low; character data with RS high.
pub mod hd44780 {
    /// Function set, issued twice as two nibbles (0x3, 0x3)
    ///
    /// The controller may power up in 8-bit mode; these are the legacy
    /// reset nibbles from the datasheet's "initializing by instruction".
    pub const FUNCTION_RESET: u8 = 0x33;

    /// Third reset nibble followed by the switch to 4-bit mode (0x3, 0x2)
    pub const FUNCTION_RESET_4BIT: u8 = 0x32;

    /// Function set: 4-bit data length, 2 lines, 5x7 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;

    /// Display on/off control: display off, cursor off, blink off
    pub const DISPLAY_OFF: u8 = 0x08;

    /// Display on/off control: display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;

    /// Clear display and return the cursor home
    pub const CLEAR_DISPLAY: u8 = 0x01;

    /// Entry mode set: increment cursor, no display shift
    pub const ENTRY_MODE_NO_SHIFT: u8 = 0x06;

    /// Entry mode set: increment cursor and shift the display (autoscroll)
    pub const ENTRY_MODE_SHIFT: u8 = 0x07;

    /// Set DDRAM address; OR the 7-bit address into the low bits
    pub const SET_DDRAM_ADDRESS: u8 = 0x80;

    /// DDRAM base address of each display row
    ///
    /// Rows 2 and 3 continue rows 0 and 1 in DDRAM, which is why a
    /// 20x4 panel's third row starts at 0x14.
    pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

    /// Power-on bring-up sequence, in the order it must be sent
    pub const INIT_SEQUENCE: [u8; 7] = [
        FUNCTION_RESET,
        FUNCTION_RESET_4BIT,
        FUNCTION_SET_4BIT_2LINE,
        DISPLAY_OFF,
        CLEAR_DISPLAY,
        ENTRY_MODE_NO_SHIFT,
        DISPLAY_ON,
    ];
}

/// MAX7219 register map
///
/// Every SPI frame is two bytes: register address, then data.
pub mod max7219 {
    /// No-op register (used to pass frames through cascaded devices)
    pub const NO_OP: u8 = 0x00;

    /// Digit 0 register; digits 0-7 occupy registers 0x01-0x08
    pub const DIGIT_0: u8 = 0x01;

    /// Number of digit registers
    pub const DIGIT_COUNT: usize = 8;

    /// Decode mode register
    ///
    /// One bit per digit; a set bit selects Code B decoding for that digit.
    pub const DECODE_MODE: u8 = 0x09;

    /// Intensity register (low nibble, 0x0 - 0xF)
    pub const INTENSITY: u8 = 0x0A;

    /// Scan limit register (number of scanned digits minus one)
    pub const SCAN_LIMIT: u8 = 0x0B;

    /// Shutdown register
    ///
    /// Per the datasheet, D0 = 0 selects shutdown and D0 = 1 normal operation.
    pub const SHUTDOWN: u8 = 0x0C;

    /// Display test register (D0 = 1 lights every segment)
    pub const DISPLAY_TEST: u8 = 0x0F;

    /// Code B decode on all eight digits
    pub const DECODE_ALL_CODE_B: u8 = 0xFF;

    /// Maximum intensity
    pub const INTENSITY_MAX: u8 = 0x0F;

    /// Scan all eight digits
    pub const SCAN_ALL_DIGITS: u8 = 0x07;

    /// Shutdown register value: shutdown mode
    pub const SHUTDOWN_MODE: u8 = 0x00;

    /// Shutdown register value: normal operation
    pub const NORMAL_OPERATION: u8 = 0x01;

    /// Decimal point bit within a digit register
    pub const DECIMAL_POINT: u8 = 0x80;

    /// Characters available in the Code B font, indexed by font value
    pub const CODE_B_GLYPHS: &str = "0123456789-EHLP ";

    /// Code B font value of the blank glyph
    pub const BLANK: u8 = 0x0F;
}

/// Mini thermal printer escape sequences
///
/// The command set is the ESC/POS dialect spoken by the common 58 mm
/// receipt printer modules. Sequences with parameters are built by
/// [`ThermalPrinter`](crate::thermal::ThermalPrinter).
pub mod thermal {
    /// ESC character
    pub const ESC: u8 = 27;

    /// GS character
    pub const GS: u8 = 29;

    /// DC2 character
    pub const DC2: u8 = 18;

    /// Line feed
    pub const LF: u8 = 10;

    /// Initialize printer (ESC @)
    pub const RESET: [u8; 2] = [ESC, 64];

    /// Heating control prefix (ESC 7); followed by max dots, heat time, interval
    pub const HEAT_CONTROL: [u8; 2] = [ESC, 55];

    /// Max heating dots parameter sent with [`HEAT_CONTROL`], in units of 8 dots
    pub const HEAT_MAX_DOTS: u8 = 7;

    /// Print density prefix (DC2 #); followed by density/break-time byte
    pub const PRINT_DENSITY: [u8; 2] = [DC2, 35];

    /// Wake from sleep (ESC = 1)
    pub const WAKE: [u8; 3] = [ESC, 61, 1];

    /// Justification prefix (ESC a); followed by 0, 1 or 2
    pub const JUSTIFY: [u8; 2] = [ESC, 0x61];

    /// Inverse (white on black) off (GS B 0), newline terminated
    pub const INVERSE_OFF: [u8; 4] = [GS, b'B', 0, LF];

    /// Double height off (ESC DC4)
    pub const DOUBLE_HEIGHT_OFF: [u8; 2] = [ESC, 20];

    /// Line spacing prefix (ESC 3); followed by height in dots
    pub const LINE_HEIGHT: [u8; 2] = [ESC, 51];

    /// Emphasis off (ESC E 0)
    pub const BOLD_OFF: [u8; 3] = [ESC, 69, 0];

    /// Underline off (ESC - 0), newline terminated
    pub const UNDERLINE_OFF: [u8; 4] = [ESC, 45, 0, LF];

    /// Normal character size (GS ! 0), newline terminated
    pub const SIZE_NORMAL: [u8; 4] = [GS, 33, 0, LF];

    /// Low nibble of the density byte: print break time
    pub const DENSITY_BREAK_TIME: u8 = 0x0F;
}
