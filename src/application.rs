//! Application layer for the oScale firmware.
//! Draws the boot screen and keeps an uptime readout current, issuing display
//! commands only while the display is idle.

use crate::config::{FIRMWARE_VERSION, TASK_SYSTEM_MS};
use crate::drivers::display::{Command, Display, DisplayBus, Text};
use crate::rtos::{Sequencer, Transition, NUM_ARGS};

/// Row of the large digit readout
pub const LINE_VALUES: u8 = 4;
/// Row of the unit labels
pub const LINE_UNITS: u8 = 7;

/// System task runs per second
const SYSTEM_TICKS_PER_SECOND: u8 = (1000 / TASK_SYSTEM_MS) as u8;

/// Screen commands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Static layout: header, separators, labels
    Boot,
    /// Redraw the uptime readout
    Uptime,
}

/// Main application state and logic
pub struct Application {
    task: Sequencer<Screen>,
    uptime_s: u16,
    system_ticks: u8,
    text: Text,
}

impl Application {
    pub fn new() -> Self {
        let mut task = Sequencer::new();
        task.switch_to(Screen::Boot);
        Self {
            task,
            uptime_s: 0,
            system_ticks: 0,
            text: Text::new(),
        }
    }

    /// Display task slot: move the active screen forward by one display command
    pub fn update<B: DisplayBus>(&mut self, display: &mut Display<B>) {
        let Some(screen) = self.task.command() else {
            return;
        };

        let transition = match screen {
            Screen::Boot => self.boot(display),
            Screen::Uptime => self.uptime(display),
        };
        self.task.apply(transition);
    }

    /// System task slot: count seconds and request a readout refresh
    pub fn on_system_tick(&mut self) {
        self.system_ticks += 1;
        if self.system_ticks < SYSTEM_TICKS_PER_SECOND {
            return;
        }
        self.system_ticks = 0;
        self.uptime_s = self.uptime_s.wrapping_add(1);
        // A refresh already queued will pick up the new value
        self.task.try_start(Screen::Uptime, [0; NUM_ARGS]);
    }

    pub fn uptime_s(&self) -> u16 {
        self.uptime_s
    }

    pub fn is_busy(&self) -> bool {
        self.task.is_busy()
    }

    fn boot<B: DisplayBus>(&mut self, display: &mut Display<B>) -> Transition<Screen> {
        let accepted = match self.task.step() {
            0 => write_string(display, 0, 0, b"oScale"),
            1 => write_string(display, 15, 0, FIRMWARE_VERSION.as_bytes()),
            2 => display.call_by_value(Command::HorizontalLine, 0, 128, 8),
            3 => display.call_by_value(Command::VerticalLine, 1, 7, 64),
            4 => write_string(display, 0, 2, b"Uptime"),
            5 => write_string(display, 0, LINE_UNITS, b"[min]  [s]"),
            _ => {
                info!("boot screen drawn");
                return Transition::Switch(Screen::Uptime);
            }
        };
        if accepted {
            Transition::Advance
        } else {
            Transition::Stay
        }
    }

    fn uptime<B: DisplayBus>(&mut self, display: &mut Display<B>) -> Transition<Screen> {
        if display.is_busy() {
            return Transition::Stay;
        }

        let minutes = (self.uptime_s / 60) % 100;
        let seconds = self.uptime_s % 60;
        self.text.clear();
        // Five characters always fit
        let _ = ufmt::uwrite!(
            self.text,
            "{}{}:{}{}",
            minutes / 10,
            minutes % 10,
            seconds / 10,
            seconds % 10
        );

        display.set_cursor_column(1);
        display.set_cursor_row(LINE_VALUES);
        if display.call_by_reference(Command::WriteNumber, self.text.as_bytes()) {
            Transition::Complete
        } else {
            Transition::Stay
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// Place the cursor and start a string command, if the display is idle
fn write_string<B: DisplayBus>(display: &mut Display<B>, column: u8, row: u8, text: &[u8]) -> bool {
    if display.is_busy() {
        return false;
    }
    display.set_cursor_column(column);
    display.set_cursor_row(row);
    display.call_by_reference(Command::WriteString, text)
}
