//! Step programs of the display commands.
//!
//! Each function handles the step currently held by the sequencer and tells
//! it how to move on. Only the scratch registers, the argument block and the
//! cursor carry state between steps.

use super::{
    digit, font, Command, Display, DisplayBus, CTRL_ADC_SEL, CTRL_BIAS, CTRL_BOOST, CTRL_COL_H,
    CTRL_COL_L, CTRL_COM_OUT, CTRL_INDICATOR, CTRL_ON, CTRL_PAGE, CTRL_PWR, CTRL_REVERSE,
    CTRL_START, CTRL_VOLT, CTRL_VOLUME,
};
use crate::config::{DISPLAY_COLUMNS, DISPLAY_CONTRAST, DISPLAY_PAGES, DISPLAY_SETTLE_US};
use crate::rtos::Transition;

type Step = Transition<Command>;

/// Controller configuration, sent once after reset
pub(crate) const INIT_SEQUENCE: [u8; 14] = [
    CTRL_START,
    CTRL_ADC_SEL,
    CTRL_COM_OUT,
    CTRL_REVERSE,
    CTRL_BIAS,
    // booster, regulator and follower on
    CTRL_PWR | 0b111,
    CTRL_BOOST,
    0x00,
    CTRL_VOLT | 0b111,
    CTRL_VOLUME,
    DISPLAY_CONTRAST,
    CTRL_INDICATOR,
    0x00,
    CTRL_ON | 1,
];

/// Dispatches to wait after releasing reset.
///
/// Integer division: a dispatch period above the settle time gives zero.
pub(crate) fn settle_ticks(period_us: u16) -> u16 {
    DISPLAY_SETTLE_US.checked_div(period_us).unwrap_or(0)
}

#[inline]
fn advance_if(sent: bool) -> Step {
    if sent {
        Transition::Advance
    } else {
        Transition::Stay
    }
}

#[inline]
fn page_address(page: u8) -> u8 {
    CTRL_PAGE | (page & 0x0F)
}

#[inline]
fn column_high(x: u8) -> u8 {
    CTRL_COL_H | (x >> 4)
}

#[inline]
fn column_low(x: u8) -> u8 {
    CTRL_COL_L | (x & 0x0F)
}

impl<B: DisplayBus> Display<B> {
    pub(super) fn initialize(&mut self) -> Result<Step, B::Error> {
        let step = match self.task.step() {
            0 => {
                debug!("display: reset");
                self.bus.select(false)?;
                self.bus.reset(true)?;
                Transition::Advance
            }
            1 => {
                self.bus.reset(false)?;
                self.task.wait = settle_ticks(self.period_us);
                if self.task.wait == 0 {
                    warn!("display: settle wait truncated to 0 at {} us", self.period_us);
                }
                Transition::Advance
            }
            2 => {
                if self.task.wait > 0 {
                    self.task.wait -= 1;
                    Transition::Stay
                } else {
                    self.bus.select(true)?;
                    self.task.counter = 0;
                    Transition::Advance
                }
            }
            3 => {
                let Some(&byte) = INIT_SEQUENCE.get(self.task.counter as usize) else {
                    return Ok(Transition::Switch(Command::Clear));
                };
                if !self.try_send_control_byte(byte)? {
                    return Ok(Transition::Stay);
                }
                self.task.counter += 1;
                if self.task.counter as usize == INIT_SEQUENCE.len() {
                    debug!("display: controller configured");
                    Transition::Switch(Command::Clear)
                } else {
                    Transition::Stay
                }
            }
            _ => Transition::Switch(Command::Clear),
        };
        Ok(step)
    }

    /// Page index lives in `wait`
    pub(super) fn clear(&mut self) -> Result<Step, B::Error> {
        let step = match self.task.step() {
            0 => {
                self.task.wait = 0;
                Transition::Advance
            }
            1 => advance_if(self.try_send_control_byte(column_high(0))?),
            2 => advance_if(self.try_send_control_byte(column_low(0))?),
            3 => {
                let page = self.task.wait as u8;
                let sent = self.try_send_control_byte(page_address(page))?;
                if sent {
                    self.task.counter = DISPLAY_COLUMNS as u16;
                }
                advance_if(sent)
            }
            4 => {
                if self.task.counter > 0 && self.try_send_data_byte(0x00)? {
                    self.task.counter -= 1;
                }
                if self.task.counter > 0 {
                    Transition::Stay
                } else if self.task.wait + 1 < DISPLAY_PAGES as u16 {
                    self.task.wait += 1;
                    Transition::Jump(1)
                } else {
                    Transition::Complete
                }
            }
            _ => Transition::Complete,
        };
        Ok(step)
    }

    pub(super) fn horizontal_line(&mut self) -> Result<Step, B::Error> {
        let [x_start, x_end, y] = self.task.args;

        let step = match self.task.step() {
            0 => advance_if(self.try_send_control_byte(page_address(y / 8))?),
            1 => advance_if(self.try_send_control_byte(column_low(x_start))?),
            2 => {
                let sent = self.try_send_control_byte(column_high(x_start))?;
                if sent {
                    self.task.counter = x_end.saturating_sub(x_start) as u16;
                    // y is consumed, keep the pixel mask in its place
                    self.task.args[2] = 1 << (y % 8);
                }
                advance_if(sent)
            }
            3 => {
                let mask = self.task.args[2];
                if self.task.counter > 0 && self.try_send_data_byte(mask)? {
                    self.task.counter -= 1;
                }
                if self.task.counter > 0 {
                    Transition::Stay
                } else {
                    Transition::Complete
                }
            }
            _ => Transition::Complete,
        };
        Ok(step)
    }

    /// Current page offset lives in `counter`
    pub(super) fn vertical_line(&mut self) -> Result<Step, B::Error> {
        let [first_page, last_page, x] = self.task.args;

        let step = match self.task.step() {
            0 => {
                self.task.counter = 0;
                Transition::Advance
            }
            1 => advance_if(self.try_send_control_byte(column_high(x))?),
            2 => advance_if(self.try_send_control_byte(column_low(x))?),
            3 => {
                let page = first_page.wrapping_add(self.task.counter as u8);
                advance_if(self.try_send_control_byte(page_address(page))?)
            }
            4 => {
                if !self.try_send_data_byte(0xFF)? {
                    return Ok(Transition::Stay);
                }
                let page = first_page.wrapping_add(self.task.counter as u8);
                if page >= last_page {
                    Transition::Complete
                } else {
                    self.task.counter += 1;
                    Transition::Jump(1)
                }
            }
            _ => Transition::Complete,
        };
        Ok(step)
    }

    /// Glyph column lives in `counter`, counting down
    pub(super) fn write_char(&mut self) -> Result<Step, B::Error> {
        let code = self.task.args[0];

        let step = match self.task.step() {
            0 => {
                self.task.counter = font::FONT_WIDTH as u16 - 1;
                Transition::Advance
            }
            1 => advance_if(self.try_send_control_byte(column_high(self.cursor.x))?),
            2 => advance_if(self.try_send_control_byte(column_low(self.cursor.x))?),
            3 => advance_if(self.try_send_control_byte(page_address(self.cursor.y))?),
            4 => {
                let byte = font::glyph(code)[self.task.counter as usize];
                if !self.try_send_data_byte(byte)? {
                    return Ok(Transition::Stay);
                }
                if self.task.counter > 0 {
                    self.task.counter -= 1;
                    Transition::Stay
                } else {
                    self.cursor.advance(font::FONT_WIDTH, 1);
                    Transition::Complete
                }
            }
            _ => Transition::Complete,
        };
        Ok(step)
    }

    /// Glyph column lives in `counter`, the half being drawn in `wait`
    /// (0 = upper page, 1 = lower page)
    pub(super) fn write_digit(&mut self) -> Result<Step, B::Error> {
        let index = self.task.args[0];

        let step = match self.task.step() {
            0 => {
                self.task.counter = digit::DIGIT_WIDTH as u16 - 1;
                self.task.wait = 0;
                Transition::Advance
            }
            1 => advance_if(self.try_send_control_byte(column_high(self.cursor.x))?),
            2 => advance_if(self.try_send_control_byte(column_low(self.cursor.x))?),
            3 => {
                let page = self.cursor.y + self.task.wait as u8;
                advance_if(self.try_send_control_byte(page_address(page))?)
            }
            4 => {
                let upper = self.task.wait == 0;
                let byte = digit::column(index, self.task.counter as u8, upper);
                if !self.try_send_data_byte(byte)? {
                    return Ok(Transition::Stay);
                }
                if self.task.counter > 0 {
                    self.task.counter -= 1;
                    Transition::Stay
                } else if upper {
                    self.task.counter = digit::DIGIT_WIDTH as u16 - 1;
                    self.task.wait = 1;
                    Transition::Jump(1)
                } else {
                    self.cursor.advance(digit::DIGIT_WIDTH, 2);
                    Transition::Complete
                }
            }
            _ => Transition::Complete,
        };
        Ok(step)
    }

    pub(super) fn write_string(&mut self) -> Step {
        self.write_text(Command::WriteChar, |c| c)
    }

    pub(super) fn write_number(&mut self) -> Step {
        self.write_text(Command::WriteDigit, digit::index)
    }

    /// Draw the cursor text one glyph at a time through `glyph_command`
    fn write_text(&mut self, glyph_command: Command, map: fn(u8) -> u8) -> Step {
        match self.task.step() {
            0 => match self.cursor.current() {
                Some(c) => {
                    self.task.args[0] = map(c);
                    Transition::Call(glyph_command)
                }
                None => Transition::Complete,
            },
            1 => {
                self.cursor.position += 1;
                if self.cursor.current().is_some() {
                    Transition::Jump(0)
                } else {
                    Transition::Complete
                }
            }
            _ => Transition::Complete,
        }
    }
}
