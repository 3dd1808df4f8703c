pub mod gpio;
pub mod spi;
pub mod timer;

// Re-export commonly used types
pub use gpio::board;
pub use spi::{Spi, SpiMode, SpiPrescaler};
pub use timer::SysTick;
