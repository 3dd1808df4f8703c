//! Recording display bus shared by the host tests

#![allow(dead_code)]

use oscale_firmware::drivers::display::{Display, DisplayBus, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeError;

/// Bus that accepts every byte into a log, with scripted stalls and faults
#[derive(Default)]
pub struct FakeBus {
    pub writes: Vec<(u8, Mode)>,
    pub selected: Option<bool>,
    pub in_reset: Option<bool>,
    /// Answer `WouldBlock` to this many writes
    pub stall: usize,
    /// Fail this many writes
    pub fail: usize,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Vec<u8> {
        self.bytes(Mode::Data)
    }

    pub fn control(&self) -> Vec<u8> {
        self.bytes(Mode::Control)
    }

    fn bytes(&self, mode: Mode) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, m)| *m == mode)
            .map(|(b, _)| *b)
            .collect()
    }
}

impl DisplayBus for FakeBus {
    type Error = FakeError;

    fn select(&mut self, selected: bool) -> Result<(), FakeError> {
        self.selected = Some(selected);
        Ok(())
    }

    fn reset(&mut self, asserted: bool) -> Result<(), FakeError> {
        self.in_reset = Some(asserted);
        Ok(())
    }

    fn try_write(&mut self, byte: u8, mode: Mode) -> nb::Result<(), FakeError> {
        if self.fail > 0 {
            self.fail -= 1;
            return Err(nb::Error::Other(FakeError));
        }
        if self.stall > 0 {
            self.stall -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.writes.push((byte, mode));
        Ok(())
    }
}

pub const PERIOD_US: u16 = 200;

/// Dispatch until the engine is idle, returning the number of dispatches
pub fn run_to_idle(display: &mut Display<FakeBus>) -> usize {
    let mut dispatches = 0;
    while display.is_busy() {
        display.dispatch().unwrap();
        dispatches += 1;
        assert!(dispatches < 100_000, "display never went idle");
    }
    dispatches
}

/// A display that finished its power-up sequence, with an empty log
pub fn ready_display() -> Display<FakeBus> {
    let mut display = Display::new(FakeBus::new(), PERIOD_US);
    run_to_idle(&mut display);
    display.bus_mut().writes.clear();
    display
}
