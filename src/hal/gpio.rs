use avr_device::atmega328p::PORTB;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::OutputPin;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// One pin of PORTB
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    pub fn into_output(self) -> Pin<P, Output> {
        // Set DDRB bit
        unsafe {
            (*PORTB::ptr()).ddrb.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8> OutputPin for Pin<P, Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        unsafe {
            (*PORTB::ptr()).portb.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        unsafe {
            (*PORTB::ptr()).portb.modify(|r, w| w.bits(r.bits() & !(1 << P)));
        }
        Ok(())
    }
}

/// PORTB pins, all inputs after reset
pub struct Parts {
    pub pb0: Pin<0, Input>,
    pub pb1: Pin<1, Input>,
    pub pb2: Pin<2, Input>,
    pub pb3: Pin<3, Input>,
    pub pb5: Pin<5, Input>,
}

pub fn split(_port: PORTB) -> Parts {
    Parts {
        pb0: Pin { _mode: PhantomData },
        pb1: Pin { _mode: PhantomData },
        pb2: Pin { _mode: PhantomData },
        pb3: Pin { _mode: PhantomData },
        pb5: Pin { _mode: PhantomData },
    }
}

// oScale board pin assignment
pub mod board {
    use super::*;

    pub type DispRst = Pin<0, Output>;
    pub type DispA0 = Pin<1, Output>;
    pub type DispCs = Pin<2, Output>;
    pub type DispSdi = Pin<3, Output>;
    pub type DispSck = Pin<5, Output>;
}
