//! Step sequencer ("arbiter") for resumable hardware protocols.
//!
//! A [`Sequencer`] holds the execution state of one peripheral driver: the
//! active command, the step inside that command's step program, a small
//! argument block and two scratch registers. Each dispatch runs exactly one
//! step and reports a [`Transition`]; a step that waits on hardware simply
//! returns [`Transition::Stay`] and is re-entered on the next dispatch.
//!
//! A command may call one sub-command. The caller's command and the step
//! after the call are parked in a single [`Frame`]; completing the
//! sub-command resumes the caller there. Nesting is limited to one level.

/// Capacity of the argument block
pub const NUM_ARGS: usize = 3;

/// Where a sub-command returns to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<C> {
    pub command: C,
    pub step: u16,
}

/// Outcome of one step of a step program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition<C> {
    /// Hardware not ready, run this step again next time
    Stay,
    /// Go to the next step
    Advance,
    /// Go to an explicit step of the same program
    Jump(u16),
    /// The logical operation is finished
    Complete,
    /// Run a sub-command and come back to the next step
    Call(C),
    /// Replace the active command without returning
    Switch(C),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequencer<C> {
    command: Option<C>,
    step: u16,
    caller: Option<Frame<C>>,
    /// Parameters passed at invocation
    pub args: [u8; NUM_ARGS],
    /// Loop counter owned by the active step program
    pub counter: u16,
    /// Delay or phase register owned by the active step program
    pub wait: u16,
}

impl<C: Copy + PartialEq> Sequencer<C> {
    pub const fn new() -> Self {
        Self {
            command: None,
            step: 0,
            caller: None,
            args: [0; NUM_ARGS],
            counter: 0,
            wait: 0,
        }
    }

    /// Zero every field
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn command(&self) -> Option<C> {
        self.command
    }

    pub fn step(&self) -> u16 {
        self.step
    }

    pub fn caller(&self) -> Option<Frame<C>> {
        self.caller
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.command.is_some()
    }

    /// Whether the active command runs as a sub-command
    #[inline]
    pub fn is_nested(&self) -> bool {
        self.caller.is_some()
    }

    /// Start a top-level command if the sequencer is idle.
    ///
    /// Returns `false` and leaves everything untouched when busy.
    pub fn try_start(&mut self, command: C, args: [u8; NUM_ARGS]) -> bool {
        if self.is_busy() {
            return false;
        }
        self.args = args;
        self.command = Some(command);
        self.step = 0;
        true
    }

    /// Finish the active command.
    ///
    /// A sub-command resumes its caller at the saved step, a top-level
    /// command leaves the sequencer idle.
    pub fn complete(&mut self) {
        match self.caller.take() {
            Some(frame) => {
                self.command = Some(frame.command);
                self.step = frame.step;
            }
            None => {
                self.command = None;
                self.step = 0;
            }
        }
    }

    /// Enter `sub_command`, returning to the step after the current one.
    ///
    /// Only one level of nesting exists. When already nested the call is
    /// rejected and only the current step counter moves on by one, which lets
    /// the calling program come back to the call on a later dispatch.
    pub fn call_subcommand(&mut self, sub_command: C) -> bool {
        if self.caller.is_some() {
            self.step = self.step.wrapping_add(1);
            return false;
        }

        let Some(command) = self.command else {
            // Nothing to return to; run it as a plain command
            self.command = Some(sub_command);
            self.step = 0;
            return true;
        };

        self.caller = Some(Frame {
            command,
            step: self.step.wrapping_add(1),
        });
        self.command = Some(sub_command);
        self.step = 0;
        true
    }

    /// Replace the active command, keeping any parked caller
    pub fn switch_to(&mut self, command: C) {
        self.command = Some(command);
        self.step = 0;
    }

    #[inline]
    pub fn advance(&mut self) {
        self.step = self.step.wrapping_add(1);
    }

    #[inline]
    pub fn jump(&mut self, step: u16) {
        self.step = step;
    }

    /// Apply the outcome of one step
    pub fn apply(&mut self, transition: Transition<C>) {
        match transition {
            Transition::Stay => {}
            Transition::Advance => self.advance(),
            Transition::Jump(step) => self.jump(step),
            Transition::Complete => self.complete(),
            Transition::Call(sub_command) => {
                self.call_subcommand(sub_command);
            }
            Transition::Switch(command) => self.switch_to(command),
        }
    }
}

impl<C: Copy + PartialEq> Default for Sequencer<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Cmd {
        Outer,
        Inner,
        Other,
    }

    #[test]
    fn reset_is_idle() {
        let mut seq = Sequencer::<Cmd>::new();
        seq.try_start(Cmd::Outer, [1, 2, 3]);
        seq.counter = 9;
        seq.reset();
        assert_eq!(seq, Sequencer::new());
        assert!(!seq.is_busy());
    }

    #[test]
    fn complete_top_level_goes_idle() {
        let mut seq = Sequencer::new();
        assert!(seq.try_start(Cmd::Outer, [0; NUM_ARGS]));
        seq.advance();
        seq.complete();
        assert_eq!(seq.command(), None);
        assert_eq!(seq.step(), 0);
    }

    #[test]
    fn complete_on_idle_stays_idle() {
        let mut seq = Sequencer::<Cmd>::new();
        seq.complete();
        assert_eq!(seq.command(), None);
    }

    #[test]
    fn try_start_rejects_when_busy() {
        let mut seq = Sequencer::new();
        assert!(seq.try_start(Cmd::Outer, [1, 2, 3]));
        seq.advance();
        let before = seq;
        assert!(!seq.try_start(Cmd::Other, [7, 7, 7]));
        assert_eq!(seq, before);
    }

    #[test]
    fn subcommand_returns_to_next_step() {
        let mut seq = Sequencer::new();
        seq.try_start(Cmd::Outer, [0; NUM_ARGS]);
        seq.jump(4);
        assert!(seq.call_subcommand(Cmd::Inner));
        assert_eq!(seq.command(), Some(Cmd::Inner));
        assert_eq!(seq.step(), 0);
        assert_eq!(seq.caller(), Some(Frame { command: Cmd::Outer, step: 5 }));

        seq.advance();
        seq.complete();
        assert_eq!(seq.command(), Some(Cmd::Outer));
        assert_eq!(seq.step(), 5);
        assert!(!seq.is_nested());
    }

    #[test]
    fn nested_call_only_moves_current_step() {
        let mut seq = Sequencer::new();
        seq.try_start(Cmd::Outer, [0; NUM_ARGS]);
        seq.call_subcommand(Cmd::Inner);
        seq.jump(2);

        assert!(!seq.call_subcommand(Cmd::Other));
        assert_eq!(seq.command(), Some(Cmd::Inner));
        assert_eq!(seq.step(), 3);
        assert_eq!(seq.caller(), Some(Frame { command: Cmd::Outer, step: 1 }));
    }

    #[test]
    fn switch_keeps_caller() {
        let mut seq = Sequencer::new();
        seq.try_start(Cmd::Outer, [0; NUM_ARGS]);
        seq.call_subcommand(Cmd::Inner);
        seq.advance();
        seq.switch_to(Cmd::Other);
        assert_eq!(seq.command(), Some(Cmd::Other));
        assert_eq!(seq.step(), 0);
        seq.complete();
        assert_eq!(seq.command(), Some(Cmd::Outer));
    }

    #[test]
    fn apply_maps_transitions() {
        let mut seq = Sequencer::new();
        seq.try_start(Cmd::Outer, [0; NUM_ARGS]);
        seq.apply(Transition::Stay);
        assert_eq!(seq.step(), 0);
        seq.apply(Transition::Advance);
        assert_eq!(seq.step(), 1);
        seq.apply(Transition::Jump(6));
        assert_eq!(seq.step(), 6);
        seq.apply(Transition::Call(Cmd::Inner));
        assert_eq!(seq.command(), Some(Cmd::Inner));
        seq.apply(Transition::Complete);
        assert_eq!((seq.command(), seq.step()), (Some(Cmd::Outer), 7));
        seq.apply(Transition::Complete);
        assert!(!seq.is_busy());
    }
}
