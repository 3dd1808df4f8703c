//! Tick driven task scheduler.
//!
//! The timer interrupt calls [`Scheduler::advance_all`] once per tick; the
//! main loop asks [`Scheduler::poll_and_clear`] whether a task slot is due and
//! runs that slot's dispatch functions to completion. Nothing here blocks and
//! nothing here allocates: the table is a fixed array of `N` slots.
//!
//! On target the scheduler lives in an `avr_device::interrupt::Mutex<RefCell<_>>`
//! and both the interrupt and the main loop access it inside
//! `interrupt::free`, which makes `poll_and_clear` a single atomic
//! read-and-clear with respect to `advance_all`.

/// State of one task slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSlot {
    active: bool,
    period: u16,
    timer: u16,
    want_to_run: bool,
}

impl TaskSlot {
    // Period is never 0, so a slot switched on without `schedule` ticks every tick
    const IDLE: Self = Self {
        active: false,
        period: 1,
        timer: 0,
        want_to_run: false,
    };

    /// Whether the slot participates in ticking
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Period in ticks
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Remaining countdown in ticks
    pub fn timer(&self) -> u16 {
        self.timer
    }
}

pub struct Scheduler<const N: usize> {
    slots: [TaskSlot; N],
    tick_us: u16,
    overrun: bool,
}

impl<const N: usize> Scheduler<N> {
    /// Create a scheduler with every slot inactive.
    ///
    /// `tick_us` is the duration of one hardware tick in microseconds.
    pub const fn new(tick_us: u16) -> Self {
        Self {
            slots: [TaskSlot::IDLE; N],
            tick_us,
            overrun: false,
        }
    }

    /// Reset every slot to inactive and record a new tick duration
    pub fn init(&mut self, tick_us: u16) {
        *self = Self::new(tick_us);
    }

    /// Duration of one tick in microseconds
    pub fn tick_us(&self) -> u16 {
        self.tick_us
    }

    /// Arm `task` to run every `period` ticks.
    ///
    /// The slot becomes active and its countdown is reloaded, so the first
    /// run request latches on the `period`-th call to [`advance_all`].
    /// A period of zero behaves like a period of one.
    ///
    /// [`advance_all`]: Scheduler::advance_all
    pub fn schedule(&mut self, task: usize, period: u16) {
        let period = period.max(1);
        let slot = &mut self.slots[task];
        slot.active = true;
        slot.period = period;
        slot.timer = period - 1;
    }

    /// Arm `task` with a period given in microseconds, truncated to whole ticks
    pub fn schedule_us(&mut self, task: usize, us: u16) {
        let ticks = us / self.tick_us.max(1);
        self.schedule(task, ticks);
    }

    /// Arm `task` with a period given in milliseconds, truncated to whole ticks
    pub fn schedule_ms(&mut self, task: usize, ms: u16) {
        let ticks = (ms as u32 * 1000) / self.tick_us.max(1) as u32;
        self.schedule(task, ticks.min(u16::MAX as u32) as u16);
    }

    /// Enable or disable a slot without touching its countdown.
    ///
    /// Disabling also drops a run request that is already latched.
    pub fn set_active(&mut self, task: usize, active: bool) {
        let slot = &mut self.slots[task];
        slot.active = active;
        if !active {
            slot.want_to_run = false;
        }
    }

    pub fn is_active(&self, task: usize) -> bool {
        self.slots[task].active
    }

    pub fn slot(&self, task: usize) -> &TaskSlot {
        &self.slots[task]
    }

    /// Count down every active slot by one tick.
    ///
    /// Interrupt context: flag and counter bookkeeping only.
    pub fn advance_all(&mut self) {
        for slot in self.slots.iter_mut() {
            if !slot.active {
                slot.want_to_run = false;
                continue;
            }

            if slot.timer > 0 {
                slot.timer -= 1;
            } else {
                slot.timer = slot.period - 1;
                if slot.want_to_run {
                    // Previous request was never consumed
                    self.overrun = true;
                }
                slot.want_to_run = true;
            }
        }
    }

    /// Return whether `task` is due and clear the request
    pub fn poll_and_clear(&mut self, task: usize) -> bool {
        core::mem::replace(&mut self.slots[task].want_to_run, false)
    }

    /// Whether a run request was dropped because the main loop fell behind
    pub fn overrun(&self) -> bool {
        self.overrun
    }

    pub fn clear_overrun(&mut self) {
        self.overrun = false;
    }
}
