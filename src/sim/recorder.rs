//! Optional per-step history recording.
//!
//! The state machine calls an injected [`Recorder`] once after reset and
//! once at the end of every step. Snapshots carry the raw (unnormalized)
//! episode arrays so a presentation layer can render tables, Gantt charts,
//! or animations without ever touching live simulation state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One recorded point of episode history.
///
/// `scheduled` is `None` for the snapshot taken at reset and `Some((job,
/// slot))` for every step snapshot. All grids are copies; mutating the
/// simulation afterwards never changes a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Step counter at the time of recording (0 = reset).
    pub step: u64,
    /// The coordinate scheduled by this step, if any.
    pub scheduled: Option<(usize, usize)>,
    /// Remaining processing time per (job, slot).
    pub remaining_time: Vec<Vec<u64>>,
    /// Absolute finish time per (job, slot); 0 = not yet scheduled.
    pub finish_time: Vec<Vec<u64>>,
    /// Latest completion time per machine.
    pub machine_finish: Vec<u64>,
    /// Current schedule length.
    pub make_span: u64,
    /// Aggregate machine utilization baseline after this step.
    pub utilization_ratio: f64,
}

/// Recording capability injected into the state machine.
///
/// The core only calls [`record`](Recorder::record); it never renders.
pub trait Recorder {
    /// Called once per reset and once at the end of every step.
    fn record(&mut self, snapshot: &StepSnapshot);
}

/// Closures record too, for callers that stream snapshots elsewhere.
impl<F: FnMut(&StepSnapshot)> Recorder for F {
    fn record(&mut self, snapshot: &StepSnapshot) {
        self(snapshot)
    }
}

/// In-memory recorder with a shared buffer.
///
/// Clones share the same buffer, so a caller can keep one handle while the
/// simulation owns the other. `Rc` is fine here: the simulation is strictly
/// single-threaded (one episode, one owner).
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    snapshots: Rc<RefCell<Vec<StepSnapshot>>>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.borrow().is_empty()
    }

    /// Copies the recorded history out.
    pub fn snapshots(&self) -> Vec<StepSnapshot> {
        self.snapshots.borrow().clone()
    }

    /// Drains the recorded history, leaving the buffer empty.
    pub fn take(&self) -> Vec<StepSnapshot> {
        std::mem::take(&mut *self.snapshots.borrow_mut())
    }
}

impl Recorder for MemoryRecorder {
    fn record(&mut self, snapshot: &StepSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}
