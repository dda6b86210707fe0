//! Problem instance model.
//!
//! An instance is the static definition of a job-shop problem: how long
//! each operation takes, which machine it needs, and the setup time a
//! machine pays before working on a given job family.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2 (Jm || C_max)

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A job-shop problem instance.
///
/// All matrices are laid out `[job][operation slot]` with one slot per
/// machine index. A slot with zero processing time represents "no operation
/// at this position" and is never schedulable.
///
/// Times are plain integer units; the consumer defines their meaning
/// (seconds, minutes, cycles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Base processing time per (job, slot). 0 = operation absent.
    pub processing_time: Vec<Vec<u64>>,
    /// Machine assigned to each (job, slot), values in `[0, machine_size)`.
    pub routing: Vec<Vec<usize>>,
    /// Setup time per (machine, job family); family = job index.
    ///
    /// Added once to the base processing time of each real operation
    /// during episode initialization.
    pub setup_time: Vec<Vec<u64>>,
}

impl Instance {
    /// Creates an instance with a zero setup table.
    pub fn new(processing_time: Vec<Vec<u64>>, routing: Vec<Vec<usize>>) -> Self {
        let jobs = processing_time.len();
        let machines = processing_time.first().map(Vec::len).unwrap_or(0);
        Self {
            processing_time,
            routing,
            setup_time: vec![vec![0; jobs]; machines],
        }
    }

    /// Sets the machine x job-family setup table.
    pub fn with_setup_time(mut self, setup_time: Vec<Vec<u64>>) -> Self {
        self.setup_time = setup_time;
        self
    }

    /// Number of jobs (J).
    pub fn job_size(&self) -> usize {
        self.processing_time.len()
    }

    /// Number of machines (M), which is also the slot count per job.
    pub fn machine_size(&self) -> usize {
        self.processing_time.first().map(Vec::len).unwrap_or(0)
    }

    /// Processing times with the setup-time contribution folded in.
    ///
    /// `augmented[i][j] = processing_time[i][j] + setup_time[routing[i][j]][i]`
    /// for real operations; absent slots stay 0 so they remain unschedulable.
    ///
    /// Only valid on an instance that passed
    /// [`validate_instance`](crate::validation::validate_instance).
    pub fn augmented_processing_time(&self) -> Vec<Vec<u64>> {
        self.processing_time
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &base)| {
                        if base == 0 {
                            0
                        } else {
                            base + self.setup_time[self.routing[i][j]][i]
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Generates a random square instance.
    ///
    /// Every job visits every machine exactly once in a random order, with
    /// processing times drawn uniformly from `time_range` and a zero setup
    /// table. Useful for tests and synthetic training workloads.
    pub fn random<R: Rng>(
        job_size: usize,
        machine_size: usize,
        time_range: RangeInclusive<u64>,
        rng: &mut R,
    ) -> Self {
        let processing_time = (0..job_size)
            .map(|_| {
                (0..machine_size)
                    .map(|_| rng.random_range(time_range.clone()))
                    .collect()
            })
            .collect();
        let routing = (0..job_size)
            .map(|_| {
                let mut machines: Vec<usize> = (0..machine_size).collect();
                machines.shuffle(rng);
                machines
            })
            .collect();
        Self::new(processing_time, routing)
    }
}
