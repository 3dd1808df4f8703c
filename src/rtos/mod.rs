//! Cooperative runtime: tick scheduler and step sequencer

pub mod scheduler;
pub mod sequencer;

pub use scheduler::{Scheduler, TaskSlot};
pub use sequencer::{Frame, Sequencer, Transition, NUM_ARGS};
