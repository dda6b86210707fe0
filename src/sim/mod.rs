//! Episode simulation: state machine, outcomes, and recording hooks.
//!
//! The simulation follows the reset/step contract of sequential decision
//! environments: [`JobShopSim::reset`] starts an episode and returns the
//! initial observation, [`JobShopSim::step`] applies one dispatching rule
//! and returns a [`StepOutcome`] with the next observation, the marginal
//! utilization reward, and the termination flag.

mod env;
mod recorder;

pub use env::{EpisodeStatus, JobShopSim, ResetOptions, StepOutcome};
pub use recorder::{MemoryRecorder, Recorder, StepSnapshot};
