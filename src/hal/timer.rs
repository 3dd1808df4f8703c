use avr_device::atmega328p::TC0;
use core::marker::PhantomData;

use crate::config::CPU_FREQ_HZ;

// TCCR0A: clear timer on compare match
const WGM01: u8 = 0x02;
// TIMSK0: compare match A interrupt
const OCIE0A: u8 = 0x02;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    const fn divisor(self) -> u32 {
        match self {
            Prescaler::Stop => 0,
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// Timer0 in CTC mode raising `TIMER0_COMPA` once per scheduler tick
pub struct SysTick {
    _timer: PhantomData<TC0>,
    prescaler: Prescaler,
}

impl SysTick {
    pub fn new(_tc0: TC0, tick_us: u16) -> Self {
        let prescaler = Prescaler::Div64;
        let counts = (CPU_FREQ_HZ / prescaler.divisor()) * tick_us as u32 / 1_000_000;
        let top = counts.saturating_sub(1).min(u8::MAX as u32) as u8;

        unsafe {
            let p = TC0::ptr();
            (*p).tccr0b.write(|w| w.bits(0));
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).tccr0a.write(|w| w.bits(WGM01));
            (*p).ocr0a.write(|w| w.bits(top));
        }

        Self {
            _timer: PhantomData,
            prescaler,
        }
    }

    pub fn start(&mut self) {
        unsafe {
            let p = TC0::ptr();
            (*p).timsk0.modify(|r, w| w.bits(r.bits() | OCIE0A));
            (*p).tccr0b.write(|w| w.bits(self.prescaler as u8));
        }
    }
}
