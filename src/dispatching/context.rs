//! Dispatch context for rule evaluation.

/// Read-only view of the simulation state passed to dispatching rules.
///
/// A rule is a pure function of this view: the same context always resolves
/// to the same coordinate. The state machine owns the underlying arrays;
/// the context only borrows them for the duration of one resolution.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Remaining processing time per (job, slot); 0 = scheduled or absent.
    pub remaining_time: &'a [Vec<u64>],
    /// Machine assigned to each (job, slot).
    pub routing: &'a [Vec<usize>],
    /// Latest completion time assigned so far to each machine.
    pub machine_finish: &'a [u64],
    /// Current schedule length (max over `machine_finish`).
    pub make_span: u64,
}

impl<'a> DispatchContext<'a> {
    /// The eligible coordinates: every slot with positive remaining time.
    ///
    /// Scheduled slots and absent slots (zero base processing time) never
    /// appear here, so a rule cannot double-schedule through this view.
    pub fn eligible(&self) -> Vec<(usize, usize)> {
        self.remaining_time
            .iter()
            .enumerate()
            .flat_map(|(job, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &t)| t > 0)
                    .map(move |(slot, _)| (job, slot))
            })
            .collect()
    }

    /// Total remaining processing time of a job.
    pub fn job_work_remaining(&self, job: usize) -> u64 {
        self.remaining_time[job].iter().sum()
    }

    /// Number of unscheduled operations of a job.
    pub fn job_ops_remaining(&self, job: usize) -> usize {
        self.remaining_time[job].iter().filter(|&&t| t > 0).count()
    }

    /// When the machine required by (job, slot) becomes free.
    pub fn machine_available(&self, job: usize, slot: usize) -> u64 {
        self.machine_finish[self.routing[job][slot]]
    }
}
