//! Serial bus access for the LCD controller

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::spi::FullDuplex;

/// State of the A0 line during a transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// A0 low: the byte is a controller instruction
    Control,
    /// A0 high: the byte goes to display RAM
    Data,
}

/// Non-blocking byte interface to the display controller.
///
/// `try_write` must only start a transfer when the bus is idle. A busy bus
/// answers `WouldBlock` and nothing changes, so the caller can retry the same
/// byte later.
pub trait DisplayBus {
    type Error;

    /// Drive chip select; `true` selects the controller
    fn select(&mut self, selected: bool) -> Result<(), Self::Error>;

    /// Drive the reset line; `true` holds the controller in reset
    fn reset(&mut self, asserted: bool) -> Result<(), Self::Error>;

    /// Start transferring `byte` with the A0 line set for `mode`
    fn try_write(&mut self, byte: u8, mode: Mode) -> nb::Result<(), Self::Error>;
}

impl<B: DisplayBus + ?Sized> DisplayBus for &mut B {
    type Error = B::Error;

    fn select(&mut self, selected: bool) -> Result<(), Self::Error> {
        (**self).select(selected)
    }

    fn reset(&mut self, asserted: bool) -> Result<(), Self::Error> {
        (**self).reset(asserted)
    }

    fn try_write(&mut self, byte: u8, mode: Mode) -> nb::Result<(), Self::Error> {
        (**self).try_write(byte, mode)
    }
}

/// Errors of the SPI backed bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<S, P> {
    Spi(S),
    Pin(P),
}

/// [`DisplayBus`] over an `embedded-hal` full duplex SPI and three output pins.
///
/// Every sent word is read back before the next one goes out; until the
/// read succeeds the bus counts as busy.
pub struct SpiBus<SPI, A0, CS, RST> {
    spi: SPI,
    a0: A0,
    cs: CS,
    rst: RST,
    in_flight: bool,
}

impl<SPI, A0, CS, RST, S, P> SpiBus<SPI, A0, CS, RST>
where
    SPI: FullDuplex<u8, Error = S>,
    A0: OutputPin<Error = P>,
    CS: OutputPin<Error = P>,
    RST: OutputPin<Error = P>,
{
    pub fn new(spi: SPI, a0: A0, cs: CS, rst: RST) -> Self {
        Self {
            spi,
            a0,
            cs,
            rst,
            in_flight: false,
        }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, A0, CS, RST) {
        (self.spi, self.a0, self.cs, self.rst)
    }

    fn finish_pending(&mut self) -> nb::Result<(), BusError<S, P>> {
        if self.in_flight {
            self.spi.read().map_err(|e| e.map(BusError::Spi))?;
            self.in_flight = false;
        }
        Ok(())
    }
}

impl<SPI, A0, CS, RST, S, P> DisplayBus for SpiBus<SPI, A0, CS, RST>
where
    SPI: FullDuplex<u8, Error = S>,
    A0: OutputPin<Error = P>,
    CS: OutputPin<Error = P>,
    RST: OutputPin<Error = P>,
{
    type Error = BusError<S, P>;

    fn select(&mut self, selected: bool) -> Result<(), Self::Error> {
        let result = if selected {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        };
        result.map_err(BusError::Pin)
    }

    fn reset(&mut self, asserted: bool) -> Result<(), Self::Error> {
        let result = if asserted {
            self.rst.set_low()
        } else {
            self.rst.set_high()
        };
        result.map_err(BusError::Pin)
    }

    fn try_write(&mut self, byte: u8, mode: Mode) -> nb::Result<(), Self::Error> {
        self.finish_pending()?;

        let result = match mode {
            Mode::Control => self.a0.set_low(),
            Mode::Data => self.a0.set_high(),
        };
        result.map_err(|e| nb::Error::Other(BusError::Pin(e)))?;

        self.spi.send(byte).map_err(|e| e.map(BusError::Spi))?;
        self.in_flight = true;
        Ok(())
    }
}
