//! Configuration constants for the oScale firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Duration of one scheduler tick in microseconds (5 kHz)
pub const SYSTICK_US: u16 = 200;

/// Firmware version shown in the header line
pub const FIRMWARE_VERSION: &str = "v1.0.0";

/// Number of scheduler task slots
pub const NUM_TASKS: usize = 2;

/// Display and GUI slot
pub const TASK_DISPLAY: usize = 0;
/// Housekeeping slot
pub const TASK_SYSTEM: usize = 1;

/// Display task period in microseconds
pub const TASK_DISPLAY_US: u16 = 200;
/// System task period in milliseconds
pub const TASK_SYSTEM_MS: u16 = 200;

/// Display width in pixel columns
pub const DISPLAY_COLUMNS: u8 = 128;
/// Display height in 8-pixel pages
pub const DISPLAY_PAGES: u8 = 8;

/// Time the controller needs after a hardware reset, in microseconds
pub const DISPLAY_SETTLE_US: u16 = 1000;

/// Electronic volume (contrast) register value
pub const DISPLAY_CONTRAST: u8 = 0x05;
