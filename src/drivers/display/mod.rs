//! Non-blocking command engine for the 128x64 ST7565-class LCD.
//!
//! Every drawing operation is a step program run by a [`Sequencer`]: one
//! dispatch performs at most one bus transaction and returns. A busy bus
//! leaves the program on the same step, so the display task never waits on
//! hardware and shares the main loop with the other tasks.
//!
//! Callers check [`Display::is_busy`] and then start a command with
//! [`Display::call_by_value`] or [`Display::call_by_reference`]. Both are
//! refused while another command runs.

pub mod bus;
pub mod digit;
pub mod font;
mod programs;
pub mod text;

pub use bus::{BusError, DisplayBus, Mode, SpiBus};
pub use text::{Text, TEXT_CAPACITY};

use crate::config::{DISPLAY_COLUMNS, DISPLAY_PAGES};
use crate::rtos::{Sequencer, NUM_ARGS};
use font::FONT_WIDTH;

// Controller instructions
pub(crate) const CTRL_ON: u8 = 0b1010_1110;
pub(crate) const CTRL_START: u8 = 0b0100_0000;
pub(crate) const CTRL_PAGE: u8 = 0b1011_0000;
pub(crate) const CTRL_COL_H: u8 = 0b0001_0000;
pub(crate) const CTRL_COL_L: u8 = 0b0000_0000;
pub(crate) const CTRL_ADC_SEL: u8 = 0b1010_0000;
pub(crate) const CTRL_REVERSE: u8 = 0b1010_0110;
pub(crate) const CTRL_BIAS: u8 = 0b1010_0010;
pub(crate) const CTRL_COM_OUT: u8 = 0b1100_0000;
pub(crate) const CTRL_PWR: u8 = 0b0010_1000;
pub(crate) const CTRL_VOLT: u8 = 0b0010_0000;
pub(crate) const CTRL_VOLUME: u8 = 0b1000_0001;
pub(crate) const CTRL_INDICATOR: u8 = 0b1010_1100;
pub(crate) const CTRL_BOOST: u8 = 0b1111_1000;

/// Display task commands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Reset and configure the controller, then clear
    Initialize = 1,
    /// Blank all display RAM
    Clear = 2,
    /// args: x start, x end (exclusive), y pixel row
    HorizontalLine = 3,
    /// args: first page, last page (inclusive), x column
    VerticalLine = 4,
    /// args: character code; drawn at the cursor
    WriteChar = 5,
    /// args: digit glyph index; drawn at the cursor, two pages tall
    WriteDigit = 6,
    /// Cursor text in the character font
    WriteString = 7,
    /// Cursor text in the digit font
    WriteNumber = 8,
}

impl Command {
    /// Numeric identifier, never 0
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, u8> {
        Ok(match id {
            1 => Self::Initialize,
            2 => Self::Clear,
            3 => Self::HorizontalLine,
            4 => Self::VerticalLine,
            5 => Self::WriteChar,
            6 => Self::WriteDigit,
            7 => Self::WriteString,
            8 => Self::WriteNumber,
            other => return Err(other),
        })
    }
}

/// Where the next glyph goes, plus the text of a running string command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    y: u8,
    text: Text,
    position: usize,
}

impl Cursor {
    const fn new() -> Self {
        Self {
            x: column_x(0),
            y: 0,
            text: Text::new(),
            position: 0,
        }
    }

    /// Pixel column of the glyph's first RAM column
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Page of the glyph
    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    fn current(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    /// Move past a glyph of `width` columns and `height` pages
    fn advance(&mut self, width: u8, height: u8) {
        if self.x >= width {
            self.x -= width;
        } else {
            self.x = DISPLAY_COLUMNS - width;
            self.y = if self.y + height < DISPLAY_PAGES {
                self.y + height
            } else {
                0
            };
        }
    }
}

/// RAM column of text column `column`; the panel is mounted mirrored
const fn column_x(column: u8) -> u8 {
    let offset = FONT_WIDTH as u16 * (column as u16 + 1);
    if offset >= DISPLAY_COLUMNS as u16 {
        0
    } else {
        DISPLAY_COLUMNS - offset as u8
    }
}

pub struct Display<B> {
    bus: B,
    task: Sequencer<Command>,
    cursor: Cursor,
    period_us: u16,
}

impl<B: DisplayBus> Display<B> {
    /// Create the engine with [`Command::Initialize`] already pending.
    ///
    /// `period_us` is how often [`dispatch`](Display::dispatch) runs; the
    /// reset settle time is counted in dispatches.
    pub fn new(bus: B, period_us: u16) -> Self {
        let mut task = Sequencer::new();
        task.switch_to(Command::Initialize);
        Self {
            bus,
            task,
            cursor: Cursor::new(),
            period_us,
        }
    }

    /// Run one step of the active command.
    ///
    /// Bus errors are returned without moving the step, so the same
    /// transaction is attempted again on the next call.
    pub fn dispatch(&mut self) -> Result<(), B::Error> {
        let Some(command) = self.task.command() else {
            return Ok(());
        };

        let transition = match command {
            Command::Initialize => self.initialize()?,
            Command::Clear => self.clear()?,
            Command::HorizontalLine => self.horizontal_line()?,
            Command::VerticalLine => self.vertical_line()?,
            Command::WriteChar => self.write_char()?,
            Command::WriteDigit => self.write_digit()?,
            Command::WriteString => self.write_string(),
            Command::WriteNumber => self.write_number(),
        };
        self.task.apply(transition);
        Ok(())
    }

    /// Display task slot entry: [`dispatch`](Display::dispatch) with bus
    /// errors logged instead of returned.
    ///
    /// Returns `false` when the bus failed; the step is retried next time.
    pub fn service(&mut self) -> bool {
        match self.dispatch() {
            Ok(()) => true,
            Err(_) => {
                let id = self.task.command().map_or(0, Command::id);
                error!("display: bus error in command {}, step {}", id, self.task.step());
                false
            }
        }
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.task.is_busy()
    }

    /// Start `command` with three byte arguments if the display is idle.
    ///
    /// The string commands started this way redraw the text of the last
    /// [`call_by_reference`](Display::call_by_reference) from its beginning.
    pub fn call_by_value(&mut self, command: Command, arg0: u8, arg1: u8, arg2: u8) -> bool {
        let accepted = self.task.try_start(command, [arg0, arg1, arg2]);
        if accepted {
            self.cursor.position = 0;
        } else {
            trace!("display: busy, rejected command {}", command.id());
        }
        accepted
    }

    /// Start a string command on `text` if the display is idle.
    ///
    /// The text is copied up to its first NUL and cut to one row.
    pub fn call_by_reference(&mut self, command: Command, text: &[u8]) -> bool {
        if self.task.is_busy() {
            trace!("display: busy, rejected command {}", command.id());
            return false;
        }

        if !self.cursor.text.set(text) {
            warn!("display: text cut to {} characters", TEXT_CAPACITY);
        }
        self.cursor.position = 0;
        self.task.try_start(command, [0; NUM_ARGS])
    }

    /// Put the cursor on text column `column`. Only valid while idle.
    pub fn set_cursor_column(&mut self, column: u8) {
        self.cursor.x = column_x(column);
    }

    /// Put the cursor on page `row`. Only valid while idle.
    pub fn set_cursor_row(&mut self, row: u8) {
        self.cursor.y = row % DISPLAY_PAGES;
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Sequencer state, mostly useful for inspection
    pub fn task(&self) -> &Sequencer<Command> {
        &self.task
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn release(self) -> B {
        self.bus
    }

    fn try_send(&mut self, byte: u8, mode: Mode) -> Result<bool, B::Error> {
        match self.bus.try_write(byte, mode) {
            Ok(()) => Ok(true),
            Err(nb::Error::WouldBlock) => Ok(false),
            Err(nb::Error::Other(e)) => Err(e),
        }
    }

    fn try_send_control_byte(&mut self, byte: u8) -> Result<bool, B::Error> {
        self.try_send(byte, Mode::Control)
    }

    fn try_send_data_byte(&mut self, byte: u8) -> Result<bool, B::Error> {
        self.try_send(byte, Mode::Data)
    }
}
