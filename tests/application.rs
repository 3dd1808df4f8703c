mod common;

use common::{ready_display, FakeBus, PERIOD_US};
use oscale_firmware::application::Application;
use oscale_firmware::drivers::display::{digit, Display};

/// Run the display task slot until both sequencers are idle
fn run_display_task(app: &mut Application, display: &mut Display<FakeBus>) {
    let mut dispatches = 0;
    while app.is_busy() || display.is_busy() {
        display.dispatch().unwrap();
        app.update(display);
        dispatches += 1;
        assert!(dispatches < 100_000, "screen never settled");
    }
}

fn glyph_bytes(text: &[u8]) -> usize {
    text.len() * 6
}

fn digit_bytes(text: &[u8]) -> usize {
    text.len() * 2 * digit::DIGIT_WIDTH as usize
}

#[test]
fn boot_screen_waits_for_power_up() {
    let mut display = Display::new(FakeBus::new(), PERIOD_US);
    let mut app = Application::new();
    run_display_task(&mut app, &mut display);

    assert!(!app.is_busy());
    assert_eq!(display.cursor().text(), b"00:00");
}

#[test]
fn boot_screen_draws_layout_and_readout() {
    let mut display = ready_display();
    let mut app = Application::new();
    run_display_task(&mut app, &mut display);

    let expected = glyph_bytes(b"oScale")
        + glyph_bytes(b"v1.0.0")
        + 128
        + 7
        + glyph_bytes(b"Uptime")
        + glyph_bytes(b"[min]  [s]")
        + digit_bytes(b"00:00");
    assert_eq!(display.bus().data().len(), expected);
}

#[test]
fn uptime_refreshes_once_per_second() {
    let mut display = ready_display();
    let mut app = Application::new();
    run_display_task(&mut app, &mut display);
    display.bus_mut().writes.clear();

    for _ in 0..4 {
        app.on_system_tick();
    }
    assert!(!app.is_busy());
    assert_eq!(app.uptime_s(), 0);

    app.on_system_tick();
    assert!(app.is_busy());
    assert_eq!(app.uptime_s(), 1);

    run_display_task(&mut app, &mut display);
    assert_eq!(display.cursor().text(), b"00:01");
    assert_eq!(display.bus().data().len(), digit_bytes(b"00:01"));
}

#[test]
fn minutes_roll_over() {
    let mut display = ready_display();
    let mut app = Application::new();
    run_display_task(&mut app, &mut display);

    for _ in 0..(61 * 5) {
        app.on_system_tick();
    }
    run_display_task(&mut app, &mut display);
    assert_eq!(app.uptime_s(), 61);
    assert_eq!(display.cursor().text(), b"01:01");
}
