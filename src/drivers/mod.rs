pub mod display;

pub use display::{Command, Display, DisplayBus, Mode, SpiBus, Text};
