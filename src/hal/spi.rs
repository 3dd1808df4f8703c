//! SPI (Serial Peripheral Interface) master for the display bus

use avr_device::atmega328p::SPI;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::spi::FullDuplex;

const SPIF: u8 = 0x80;

/// SPI clock prescaler options
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SpiPrescaler {
    Div4 = 0,
    Div16 = 1,
    Div64 = 2,
    Div128 = 3,
}

/// SPI mode configurations
#[derive(Clone, Copy)]
pub enum SpiMode {
    Mode0, // CPOL=0, CPHA=0
    Mode1, // CPOL=0, CPHA=1
    Mode2, // CPOL=1, CPHA=0
    Mode3, // CPOL=1, CPHA=1
}

/// SPI peripheral driver.
///
/// Never waits: `send` writes the data register, `read` reports
/// `WouldBlock` until the transfer-complete flag is up.
pub struct Spi {
    _spi: PhantomData<SPI>,
}

impl Spi {
    /// Enable the SPI as MSB-first master.
    ///
    /// SCK, MOSI and SS must already be outputs.
    pub fn new(_spi: SPI, mode: SpiMode, prescaler: SpiPrescaler) -> Self {
        let mode_bits = match mode {
            SpiMode::Mode0 => 0x00,
            SpiMode::Mode1 => 0x04,
            SpiMode::Mode2 => 0x08,
            SpiMode::Mode3 => 0x0C,
        };

        unsafe {
            let p = SPI::ptr();
            // SPE | MSTR | CPOL/CPHA | SPR
            (*p).spcr
                .write(|w| w.bits(0x50 | mode_bits | prescaler as u8));
        }

        Self { _spi: PhantomData }
    }
}

impl FullDuplex<u8> for Spi {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        unsafe {
            let p = SPI::ptr();
            if (*p).spsr.read().bits() & SPIF == 0 {
                return Err(nb::Error::WouldBlock);
            }
            // Reading SPDR after SPSR clears SPIF
            Ok((*p).spdr.read().bits())
        }
    }

    fn send(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        unsafe {
            let p = SPI::ptr();
            (*p).spdr.write(|w| w.bits(byte));
        }
        Ok(())
    }
}
