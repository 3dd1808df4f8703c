//! oScale firmware runtime.
//!
//! A fixed-rate tick drives [`rtos::Scheduler`]; the main loop runs each due
//! task slot once. Peripheral drivers keep their protocol state in an
//! [`rtos::Sequencer`] and advance one non-blocking step per run, the display
//! engine in [`drivers::display`] being the main user.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod application;
pub mod config;
pub mod drivers;
pub mod rtos;

#[cfg(target_arch = "avr")]
pub mod hal;
