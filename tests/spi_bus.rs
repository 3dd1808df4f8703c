use core::convert::Infallible;

use embedded_hal::spi::FullDuplex;
use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};
use embedded_hal_mock::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use oscale_firmware::drivers::display::{DisplayBus, Mode, SpiBus};

#[test]
fn a0_follows_mode_and_words_are_read_back() {
    let spi = SpiMock::new(&[
        SpiTransaction::send(0xAF),
        SpiTransaction::read(0x00),
        SpiTransaction::send(0x55),
    ]);
    let a0 = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);
    let cs = PinMock::new(&[]);
    let rst = PinMock::new(&[]);

    let mut bus = SpiBus::new(spi, a0, cs, rst);
    bus.try_write(0xAF, Mode::Control).unwrap();
    bus.try_write(0x55, Mode::Data).unwrap();

    let (mut spi, mut a0, mut cs, mut rst) = bus.release();
    spi.done();
    a0.done();
    cs.done();
    rst.done();
}

#[test]
fn select_and_reset_are_active_low() {
    let spi = SpiMock::new(&[]);
    let a0 = PinMock::new(&[]);
    let cs = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
    ]);
    let rst = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);

    let mut bus = SpiBus::new(spi, a0, cs, rst);
    bus.select(false).unwrap();
    bus.reset(true).unwrap();
    bus.reset(false).unwrap();
    bus.select(true).unwrap();

    let (mut spi, mut a0, mut cs, mut rst) = bus.release();
    spi.done();
    a0.done();
    cs.done();
    rst.done();
}

/// SPI whose read-back reports a transfer in progress a set number of times
#[derive(Default)]
struct SlowSpi {
    busy_reads: usize,
    sent: Vec<u8>,
}

impl FullDuplex<u8> for SlowSpi {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.busy_reads > 0 {
            self.busy_reads -= 1;
            return Err(nb::Error::WouldBlock);
        }
        Ok(0)
    }

    fn send(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        self.sent.push(byte);
        Ok(())
    }
}

#[test]
fn busy_transfer_rejects_without_touching_a0() {
    let spi = SlowSpi {
        busy_reads: 1,
        ..SlowSpi::default()
    };
    // only the two accepted writes drive A0
    let a0 = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);
    let cs = PinMock::new(&[]);
    let rst = PinMock::new(&[]);

    let mut bus = SpiBus::new(spi, a0, cs, rst);
    bus.try_write(0xAF, Mode::Control).unwrap();

    assert!(matches!(
        bus.try_write(0x55, Mode::Data),
        Err(nb::Error::WouldBlock)
    ));

    bus.try_write(0x55, Mode::Data).unwrap();

    let (spi, mut a0, mut cs, mut rst) = bus.release();
    assert_eq!(spi.sent, vec![0xAF, 0x55]);
    a0.done();
    cs.done();
    rst.done();
}
