#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
mod firmware {
    use avr_device::atmega328p::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;

    use oscale_firmware::application::Application;
    use oscale_firmware::config::{
        NUM_TASKS, SYSTICK_US, TASK_DISPLAY, TASK_DISPLAY_US, TASK_SYSTEM, TASK_SYSTEM_MS,
    };
    use oscale_firmware::drivers::{Display, SpiBus};
    use oscale_firmware::hal::{board, gpio, Spi, SpiMode, SpiPrescaler, SysTick};
    use oscale_firmware::rtos::Scheduler;

    // Shared between the tick interrupt and the main loop
    static SCHEDULER: Mutex<RefCell<Scheduler<NUM_TASKS>>> =
        Mutex::new(RefCell::new(Scheduler::new(SYSTICK_US)));

    /// Read and clear a run request atomically with respect to the tick
    fn run(task: usize) -> bool {
        interrupt::free(|cs| SCHEDULER.borrow(cs).borrow_mut().poll_and_clear(task))
    }

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        // Display pins; SS (PB2) doubles as chip select and keeps the SPI in master mode
        let pins = gpio::split(dp.PORTB);
        let rst: board::DispRst = pins.pb0.into_output();
        let a0: board::DispA0 = pins.pb1.into_output();
        let cs: board::DispCs = pins.pb2.into_output();
        let _sdi: board::DispSdi = pins.pb3.into_output();
        let _sck: board::DispSck = pins.pb5.into_output();

        let spi = Spi::new(dp.SPI, SpiMode::Mode3, SpiPrescaler::Div16);
        let mut display = Display::new(SpiBus::new(spi, a0, cs, rst), TASK_DISPLAY_US);
        let mut app = Application::new();

        interrupt::free(|cs| {
            let mut os = SCHEDULER.borrow(cs).borrow_mut();
            os.init(SYSTICK_US);
            os.schedule_us(TASK_DISPLAY, TASK_DISPLAY_US);
            os.schedule_ms(TASK_SYSTEM, TASK_SYSTEM_MS);
        });

        let mut systick = SysTick::new(dp.TC0, SYSTICK_US);
        systick.start();

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        loop {
            // Fastest slot first
            if run(TASK_DISPLAY) {
                display.service();
                app.update(&mut display);
            }

            if run(TASK_SYSTEM) {
                app.on_system_tick();
            }
        }
    }

    #[avr_device::interrupt(atmega328p)]
    fn TIMER0_COMPA() {
        interrupt::free(|cs| SCHEDULER.borrow(cs).borrow_mut().advance_all());
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
