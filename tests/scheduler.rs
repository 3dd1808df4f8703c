use oscale_firmware::rtos::Scheduler;

const A: usize = 0;
const B: usize = 1;
const IDLE: usize = 2;

/// Tick once and collect the run requests of every slot
fn tick(os: &mut Scheduler<3>) -> [bool; 3] {
    os.advance_all();
    [A, B, IDLE].map(|task| os.poll_and_clear(task))
}

#[test]
fn periods_two_and_four() {
    let mut os = Scheduler::<3>::new(100);
    os.schedule(A, 2);
    os.schedule(B, 4);

    let runs: Vec<_> = (0..5).map(|_| tick(&mut os)).collect();
    let a: Vec<_> = runs.iter().map(|r| r[0]).collect();
    let b: Vec<_> = runs.iter().map(|r| r[1]).collect();

    assert_eq!(a, [false, true, false, true, false]);
    assert_eq!(b, [false, false, false, true, false]);
    assert!(runs.iter().all(|r| !r[2]));
    assert!(!os.overrun());
}

#[test]
fn periods_from_time_units() {
    let mut os = Scheduler::<3>::new(100);
    os.schedule_us(A, 200);
    os.schedule_us(B, 400);
    assert_eq!(os.slot(A).period(), 2);
    assert_eq!(os.slot(B).period(), 4);

    os.schedule_ms(A, 2);
    assert_eq!(os.slot(A).period(), 20);

    // below one tick still runs every tick
    os.schedule_us(B, 50);
    assert_eq!(os.slot(B).period(), 1);
    assert!(tick(&mut os)[1]);
}

#[test]
fn firmware_rates() {
    use oscale_firmware::config::{SYSTICK_US, TASK_DISPLAY_US, TASK_SYSTEM_MS};

    let mut os = Scheduler::<3>::new(SYSTICK_US);
    os.schedule_us(A, TASK_DISPLAY_US);
    os.schedule_ms(B, TASK_SYSTEM_MS);
    assert_eq!(os.slot(A).period(), 1);
    assert_eq!(os.slot(B).period(), 1000);
}

#[test]
fn unconsumed_request_latches_overrun() {
    let mut os = Scheduler::<3>::new(100);
    os.schedule(A, 1);
    os.advance_all();
    os.advance_all();
    assert!(os.overrun());
    // both ticks collapse into one request
    assert!(os.poll_and_clear(A));
    assert!(!os.poll_and_clear(A));

    os.clear_overrun();
    assert!(!os.overrun());
}

#[test]
fn paused_slot_resumes_where_it_stopped() {
    let mut os = Scheduler::<3>::new(100);
    os.schedule(A, 3);
    tick(&mut os);
    os.set_active(A, false);
    for _ in 0..10 {
        assert!(!tick(&mut os)[0]);
    }
    assert_eq!(os.slot(A).timer(), 1);

    os.set_active(A, true);
    assert!(!tick(&mut os)[0]);
    assert!(tick(&mut os)[0]);
}
