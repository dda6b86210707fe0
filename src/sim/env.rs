//! The scheduling state machine.
//!
//! [`JobShopSim`] owns all mutable episode state and exposes exactly two
//! mutators: `reset` and `step`. Each step applies one dispatching decision:
//! resolve the chosen rule to a (job, slot) coordinate, propagate the
//! precedence and machine-exclusivity constraints into a finish time, and
//! derive the utilization-based reward.
//!
//! # Algorithm
//!
//! For a scheduled slot (i, j) with augmented duration d on machine m:
//!
//! ```text
//! start       = machine_finish[m]                      if j == 0
//!             = max(machine_finish[m], finish[i][j-1]) otherwise
//! finish[i][j] = start + d
//! machine_finish[m] = finish[i][j]
//! make_span   = max(machine_finish)
//! ```
//!
//! The two binding constraints of job-shop scheduling are in the `max`: an
//! operation starts neither before its predecessor in the same job finishes
//! nor before its machine is free.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2, 4

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::dispatching::{DispatchContext, RuleCatalog};
use crate::error::SimError;
use crate::models::{Instance, Observation};
use crate::sim::recorder::{Recorder, StepSnapshot};
use crate::validation::validate_instance;

/// Lifecycle of one episode.
///
/// `reset` moves any state to `Ready`; `step` moves `Ready`/`Running` to
/// `Running`, or to `Terminated` once every slot's remaining time is zero.
/// `Terminated` is absorbing until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// Freshly reset, no step taken yet.
    Ready,
    /// At least one step taken, work remaining.
    Running,
    /// All work scheduled; the state is read-only until reset.
    Terminated,
}

/// Optional metadata for a reset.
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    /// Episode index override; without it the counter just increments.
    pub episode: Option<u64>,
    /// Phase label (e.g. "train", "eval") carried for bookkeeping.
    pub phase: Option<String>,
}

impl ResetOptions {
    /// Creates empty reset options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the episode index.
    pub fn with_episode(mut self, episode: u64) -> Self {
        self.episode = Some(episode);
        self
    }

    /// Sets the phase label.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }
}

/// Result of one step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Fresh observation snapshot (never aliases internal state).
    pub observation: Observation,
    /// Marginal change in aggregate machine utilization.
    pub reward: f64,
    /// Whether the episode just terminated.
    pub done: bool,
    /// Diagnostic side channel; carries no required keys.
    pub info: HashMap<String, f64>,
}

/// The job-shop dispatching simulation.
///
/// Strictly single-threaded and synchronous: `reset` and `step` run to
/// completion, nothing suspends, and parallel episodes require independent
/// `JobShopSim` values.
///
/// # Example
///
/// ```
/// use jobshop_sim::models::Instance;
/// use jobshop_sim::sim::JobShopSim;
///
/// let instance = Instance::new(
///     vec![vec![3, 2], vec![4, 1]],
///     vec![vec![0, 1], vec![1, 0]],
/// );
/// let mut sim = JobShopSim::new(instance).unwrap();
/// let outcome = sim.step(0).unwrap(); // Apply the SPT rule
/// assert!(!outcome.done);
/// ```
pub struct JobShopSim {
    instance: Instance,
    catalog: RuleCatalog,
    recorder: Option<Box<dyn Recorder>>,

    // Fixed per instance
    augmented: Vec<Vec<u64>>,
    max_process_time: u64,
    total_work: u64,

    // Episode state, reset every episode
    remaining: Vec<Vec<u64>>,
    finish: Vec<Vec<u64>>,
    machine_finish: Vec<u64>,
    make_span: u64,
    utilization_ratio: f64,
    status: EpisodeStatus,

    // Bookkeeping, not part of the scheduling logic proper
    step_count: u64,
    episode_count: u64,
    phase: String,
}

impl JobShopSim {
    /// Creates a simulation over a validated instance, in `Ready` state.
    ///
    /// # Errors
    /// [`SimError::MalformedInstance`] when the instance fails structural
    /// validation; no episode state exists in that case.
    pub fn new(instance: Instance) -> Result<Self, SimError> {
        validate_instance(&instance)
            .map_err(|errors| SimError::MalformedInstance { errors })?;

        let augmented = instance.augmented_processing_time();
        let max_process_time = augmented.iter().flatten().copied().max().unwrap_or(0);
        let total_work = augmented.iter().flatten().sum();
        let jobs = instance.job_size();
        let machines = instance.machine_size();

        Ok(Self {
            instance,
            catalog: RuleCatalog::standard(),
            recorder: None,
            remaining: augmented.clone(),
            augmented,
            max_process_time,
            total_work,
            finish: vec![vec![0; machines]; jobs],
            machine_finish: vec![0; machines],
            make_span: 0,
            utilization_ratio: 0.0,
            status: EpisodeStatus::Ready,
            step_count: 0,
            episode_count: 0,
            phase: "train".to_string(),
        })
    }

    /// Replaces the rule catalog (the action space).
    pub fn with_catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Attaches a recording hook, called once per reset and per step.
    pub fn with_recorder(mut self, recorder: impl Recorder + 'static) -> Self {
        self.recorder = Some(Box::new(recorder));
        self
    }

    /// Resets to a fresh episode and returns the initial observation.
    pub fn reset(&mut self) -> Observation {
        self.reset_with(ResetOptions::default())
    }

    /// Resets with episode metadata.
    ///
    /// Remaining times return to the augmented processing times; finish
    /// times, machine availability, make-span, and the utilization baseline
    /// all return to zero. Valid from any state.
    pub fn reset_with(&mut self, options: ResetOptions) -> Observation {
        self.remaining = self.augmented.clone();
        for row in &mut self.finish {
            row.iter_mut().for_each(|v| *v = 0);
        }
        self.machine_finish.iter_mut().for_each(|v| *v = 0);
        self.make_span = 0;
        self.utilization_ratio = 0.0;
        self.status = EpisodeStatus::Ready;
        self.step_count = 0;
        self.episode_count = options.episode.unwrap_or(self.episode_count + 1);
        if let Some(phase) = options.phase {
            self.phase = phase;
        }

        debug!(
            episode = self.episode_count,
            phase = %self.phase,
            total_work = self.total_work,
            "episode reset"
        );
        self.record_snapshot(None);
        self.observation()
    }

    /// Applies one dispatching decision.
    ///
    /// `action` indexes the rule catalog; the resolved rule picks one slot
    /// with positive remaining time, which is then scheduled per the module
    /// algorithm. On any error the episode state is left untouched.
    ///
    /// # Errors
    /// - [`SimError::StepAfterTermination`] once the episode is done.
    /// - [`SimError::InvalidAction`] when `action` is outside the catalog,
    ///   or the rule resolves no schedulable slot.
    pub fn step(&mut self, action: usize) -> Result<StepOutcome, SimError> {
        if self.status == EpisodeStatus::Terminated {
            return Err(SimError::StepAfterTermination);
        }

        let rule = self.catalog.get(action).ok_or_else(|| SimError::InvalidAction {
            action,
            reason: format!("index outside catalog of {} rules", self.catalog.len()),
        })?;

        let ctx = DispatchContext {
            remaining_time: &self.remaining,
            routing: &self.instance.routing,
            machine_finish: &self.machine_finish,
            make_span: self.make_span,
        };
        let (job, slot) = rule.select(&ctx).ok_or_else(|| SimError::InvalidAction {
            action,
            reason: format!("rule {} resolved no schedulable slot", rule.name()),
        })?;
        if self.remaining[job][slot] == 0 {
            // Unreachable through the eligibility filter; kept so a future
            // rule source can never corrupt machine_finish or make_span.
            return Err(SimError::InvalidAction {
                action,
                reason: format!("slot ({job}, {slot}) has no remaining work"),
            });
        }
        let rule_name = rule.name();

        // The transition proper: one cell, one machine, the global make-span.
        self.step_count += 1;
        let duration = self.augmented[job][slot];
        let machine = self.instance.routing[job][slot];
        self.remaining[job][slot] = 0;

        let start = if slot == 0 {
            self.machine_finish[machine]
        } else {
            self.machine_finish[machine].max(self.finish[job][slot - 1])
        };
        self.finish[job][slot] = start + duration;
        self.machine_finish[machine] = self.finish[job][slot];
        self.make_span = self.machine_finish.iter().copied().max().unwrap_or(0);

        let reward = self.update_utilization_ratio();
        let work_left: u64 = self.remaining.iter().flatten().sum();
        let done = work_left == 0;
        self.status = if done {
            EpisodeStatus::Terminated
        } else {
            EpisodeStatus::Running
        };

        trace!(
            step = self.step_count,
            rule = rule_name,
            job,
            slot,
            machine,
            finish = self.finish[job][slot],
            make_span = self.make_span,
            reward,
            done,
            "scheduled operation"
        );
        self.record_snapshot(Some((job, slot)));

        let info = HashMap::from([
            ("make_span".to_string(), self.make_span as f64),
            ("utilization".to_string(), self.utilization_ratio),
        ]);
        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            done,
            info,
        })
    }

    /// Builds a fresh observation of the current state.
    ///
    /// Channels per the contract: remaining time over the fixed episode
    /// maximum, finish times over the current make-span (all-zero when no
    /// operation is scheduled yet), and per-slot machine utilization.
    pub fn observation(&self) -> Observation {
        let obs = Observation {
            remaining: self.remaining_channel(),
            finish: self.finish_channel(),
            utilization: self.utilization_channel(),
        };
        debug_assert!(obs.is_finite());
        obs
    }

    fn remaining_channel(&self) -> Vec<Vec<f32>> {
        let divisor = self.max_process_time as f32;
        self.remaining
            .iter()
            .map(|row| row.iter().map(|&v| v as f32 / divisor).collect())
            .collect()
    }

    fn finish_channel(&self) -> Vec<Vec<f32>> {
        // Per-row maxima first, then the grid maximum over them; zero means
        // nothing is scheduled and the channel is returned unnormalized.
        let divisor = self
            .finish
            .iter()
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .max()
            .unwrap_or(0);
        self.finish
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| {
                        if divisor == 0 {
                            v as f32
                        } else {
                            v as f32 / divisor as f32
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn utilization_channel(&self) -> Vec<Vec<f32>> {
        // Recomputed in full each step: make_span can move every step, which
        // re-scales the utilization of every already-scheduled slot.
        self.remaining
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &remaining)| {
                        let scheduled = remaining == 0 && self.augmented[i][j] > 0;
                        if scheduled && self.make_span > 0 {
                            self.machine_finish[self.instance.routing[i][j]] as f32
                                / self.make_span as f32
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Advances the utilization baseline and returns the step reward.
    ///
    /// `new_ratio = consumed / (machines * make_span)`; the reward is the
    /// marginal change against the previous ratio. The first scheduled
    /// operation always has positive duration, so make_span is positive
    /// from the first step on; the zero guard covers the reset state only.
    fn update_utilization_ratio(&mut self) -> f64 {
        let work_left: u64 = self.remaining.iter().flatten().sum();
        let consumed = self.total_work - work_left;
        let new_ratio = if self.make_span == 0 {
            0.0
        } else {
            consumed as f64 / (self.instance.machine_size() as f64 * self.make_span as f64)
        };
        let reward = new_ratio - self.utilization_ratio;
        self.utilization_ratio = new_ratio;
        reward
    }

    fn record_snapshot(&mut self, scheduled: Option<(usize, usize)>) {
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(&StepSnapshot {
                step: self.step_count,
                scheduled,
                remaining_time: self.remaining.clone(),
                finish_time: self.finish.clone(),
                machine_finish: self.machine_finish.clone(),
                make_span: self.make_span,
                utilization_ratio: self.utilization_ratio,
            });
        }
    }

    /// The immutable problem definition.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The action catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Remaining processing time per (job, slot).
    pub fn remaining_time(&self) -> &[Vec<u64>] {
        &self.remaining
    }

    /// Absolute finish time per (job, slot); 0 = not yet scheduled.
    pub fn finish_time(&self) -> &[Vec<u64>] {
        &self.finish
    }

    /// Latest completion time per machine.
    pub fn machine_finish(&self) -> &[u64] {
        &self.machine_finish
    }

    /// Current schedule length.
    pub fn make_span(&self) -> u64 {
        self.make_span
    }

    /// Aggregate machine utilization baseline.
    pub fn utilization_ratio(&self) -> f64 {
        self.utilization_ratio
    }

    /// Current lifecycle state.
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// Whether the episode has terminated.
    pub fn is_done(&self) -> bool {
        self.status == EpisodeStatus::Terminated
    }

    /// Steps taken this episode.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Episode counter.
    pub fn episode_count(&self) -> u64 {
        self.episode_count
    }

    /// Current phase label.
    pub fn phase(&self) -> &str {
        &self.phase
    }
}

impl fmt::Debug for JobShopSim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobShopSim")
            .field("jobs", &self.instance.job_size())
            .field("machines", &self.instance.machine_size())
            .field("catalog", &self.catalog.names())
            .field("status", &self.status)
            .field("step_count", &self.step_count)
            .field("make_span", &self.make_span)
            .field("recording", &self.recorder.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::recorder::MemoryRecorder;

    // Standard-catalog action indices used below.
    const SPT: usize = 0;
    const MWKR: usize = 3;

    /// Instance of the reference scenario: processing [[3,2],[4,1]],
    /// routing [[0,1],[1,0]], zero setup times.
    fn two_by_two() -> Instance {
        Instance::new(
            vec![vec![3, 2], vec![4, 1]],
            vec![vec![0, 1], vec![1, 0]],
        )
    }

    fn two_by_two_sim() -> JobShopSim {
        JobShopSim::new(two_by_two()).unwrap()
    }

    #[test]
    fn test_new_rejects_malformed_instance() {
        let instance = Instance::new(vec![vec![3, 2], vec![4, 1]], vec![vec![0, 1]]);
        let err = JobShopSim::new(instance).unwrap_err();
        assert!(matches!(err, SimError::MalformedInstance { .. }));
    }

    #[test]
    fn test_reset_initial_state() {
        let mut sim = two_by_two_sim();
        let obs = sim.reset();

        assert_eq!(sim.status(), EpisodeStatus::Ready);
        assert_eq!(sim.make_span(), 0);
        assert_eq!(sim.machine_finish(), &[0, 0]);
        let total: u64 = sim.remaining_time().iter().flatten().sum();
        assert_eq!(total, 3 + 2 + 4 + 1);

        // Channel 0 scaled by max augmented time (4); channels 1, 2 all zero.
        assert_eq!(obs.remaining[1][0], 1.0);
        assert_eq!(obs.remaining[0][0], 0.75);
        assert!(obs.finish.iter().flatten().all(|&v| v == 0.0));
        assert!(obs.utilization.iter().flatten().all(|&v| v == 0.0));
        assert!(obs.is_finite());
    }

    #[test]
    fn test_first_step_schedules_0_0() {
        let mut sim = two_by_two_sim();
        // MWKR ties on job work (5 vs 5) and falls to the lowest coordinate.
        let outcome = sim.step(MWKR).unwrap();

        assert_eq!(sim.finish_time()[0][0], 3);
        assert_eq!(sim.machine_finish(), &[3, 0]);
        assert_eq!(sim.make_span(), 3);
        assert!(outcome.reward > 0.0);
        // consumed 3 of 10 over 2 machines x make_span 3
        assert!((sim.utilization_ratio() - 0.5).abs() < 1e-12);
        assert!(!outcome.done);
        assert_eq!(sim.status(), EpisodeStatus::Running);
    }

    #[test]
    fn test_second_step_waits_for_busy_machine() {
        let mut sim = two_by_two_sim();
        sim.step(MWKR).unwrap(); // (0,0) on machine 0, finish 3

        // SPT picks (1,1): duration 1 on machine 0. No predecessor finish
        // recorded for job 1 yet, but machine 0 is busy until 3.
        sim.step(SPT).unwrap();
        assert_eq!(sim.finish_time()[1][1], 4);
        assert_eq!(sim.machine_finish(), &[4, 0]);
        assert_eq!(sim.make_span(), 4);
    }

    #[test]
    fn test_predecessor_constraint_binds() {
        let mut sim = two_by_two_sim();
        sim.step(MWKR).unwrap(); // (0,0): finish 3 on machine 0
        sim.step(SPT).unwrap(); // (1,1): finish 4 on machine 0

        // SPT now picks (0,1): machine 1 is free, but the job predecessor
        // (0,0) finished at 3, so it starts there.
        sim.step(SPT).unwrap();
        assert_eq!(sim.finish_time()[0][1], 5);
        assert_eq!(sim.machine_finish(), &[4, 5]);
        assert_eq!(sim.make_span(), 5);
    }

    #[test]
    fn test_episode_terminates_exactly_when_work_is_gone() {
        let mut sim = two_by_two_sim();
        assert!(!sim.step(MWKR).unwrap().done);
        assert!(!sim.step(SPT).unwrap().done);
        assert!(!sim.step(SPT).unwrap().done);

        // Last slot: (1,0), duration 4 on machine 1, free at 5.
        let outcome = sim.step(SPT).unwrap();
        assert!(outcome.done);
        assert_eq!(sim.finish_time()[1][0], 9);
        assert_eq!(sim.make_span(), 9);
        assert_eq!(sim.status(), EpisodeStatus::Terminated);
        let left: u64 = sim.remaining_time().iter().flatten().sum();
        assert_eq!(left, 0);
    }

    #[test]
    fn test_reward_telescopes_to_final_ratio() {
        let mut sim = two_by_two_sim();
        let mut total_reward = 0.0;
        for action in [MWKR, SPT, SPT, SPT] {
            total_reward += sim.step(action).unwrap().reward;
        }
        assert!(sim.is_done());
        // Rewards start from a zero baseline, so they sum to the final ratio:
        // 10 units of work over 2 machines x make_span 9.
        assert!((total_reward - sim.utilization_ratio()).abs() < 1e-12);
        assert!((sim.utilization_ratio() - 10.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_after_termination_is_rejected() {
        let mut sim = two_by_two_sim();
        for action in [MWKR, SPT, SPT, SPT] {
            sim.step(action).unwrap();
        }
        let err = sim.step(SPT).unwrap_err();
        assert!(matches!(err, SimError::StepAfterTermination));

        // reset clears the absorbing state
        sim.reset();
        assert_eq!(sim.status(), EpisodeStatus::Ready);
        assert!(sim.step(SPT).is_ok());
    }

    #[test]
    fn test_invalid_action_leaves_state_unchanged() {
        let mut sim = two_by_two_sim();
        sim.step(MWKR).unwrap();

        let remaining_before = sim.remaining_time().to_vec();
        let machine_before = sim.machine_finish().to_vec();
        let steps_before = sim.step_count();

        let err = sim.step(99).unwrap_err();
        assert!(matches!(err, SimError::InvalidAction { action: 99, .. }));
        assert_eq!(sim.remaining_time(), remaining_before.as_slice());
        assert_eq!(sim.machine_finish(), machine_before.as_slice());
        assert_eq!(sim.step_count(), steps_before);
    }

    #[test]
    fn test_machine_finish_and_make_span_monotone() {
        let mut sim = two_by_two_sim();
        let mut last_machines = sim.machine_finish().to_vec();
        let mut last_make_span = sim.make_span();
        for action in [MWKR, SPT, SPT, SPT] {
            sim.step(action).unwrap();
            for (m, &finish) in sim.machine_finish().iter().enumerate() {
                assert!(finish >= last_machines[m]);
            }
            assert!(sim.make_span() >= last_make_span);
            last_machines = sim.machine_finish().to_vec();
            last_make_span = sim.make_span();
        }
    }

    #[test]
    fn test_setup_time_augments_first_touch() {
        // Setup of 2 on machine 0 / family 0 stretches (0,0) to 5 units.
        let instance = two_by_two().with_setup_time(vec![vec![2, 0], vec![0, 0]]);
        let mut sim = JobShopSim::new(instance).unwrap();

        assert_eq!(sim.remaining_time()[0][0], 5);
        sim.step(MWKR).unwrap(); // Job 0 now carries 7 vs job 1's 5
        assert_eq!(sim.finish_time()[0][0], 5);
        assert_eq!(sim.machine_finish(), &[5, 0]);
    }

    #[test]
    fn test_remaining_channel_divisor_is_fixed() {
        let mut sim = two_by_two_sim();
        sim.step(SPT).unwrap(); // Schedules (1,1), the global max 4 survives
        let obs = sim.observation();
        // (1,0) still divides by the initial maximum 4
        assert_eq!(obs.remaining[1][0], 1.0);
        assert_eq!(obs.remaining[1][1], 0.0);
    }

    #[test]
    fn test_finish_channel_normalized_by_grid_max() {
        let mut sim = two_by_two_sim();
        sim.step(MWKR).unwrap(); // finish[0][0] = 3, make_span 3
        let obs = sim.observation();
        assert_eq!(obs.finish[0][0], 1.0);
        assert_eq!(obs.finish[1][0], 0.0);
        assert!(obs.is_finite());
    }

    #[test]
    fn test_utilization_channel_marks_scheduled_slots() {
        let mut sim = two_by_two_sim();
        sim.step(MWKR).unwrap(); // (0,0) on machine 0
        sim.step(SPT).unwrap(); // (1,1) on machine 0, make_span 4
        let obs = sim.observation();

        // Both scheduled slots sit on machine 0 (finish 4) over make_span 4.
        assert_eq!(obs.utilization[0][0], 1.0);
        assert_eq!(obs.utilization[1][1], 1.0);
        assert_eq!(obs.utilization[0][1], 0.0);
        assert_eq!(obs.utilization[1][0], 0.0);
    }

    #[test]
    fn test_absent_slots_never_scheduled() {
        let instance = Instance::new(
            vec![vec![3, 0], vec![0, 2]],
            vec![vec![0, 1], vec![1, 0]],
        );
        let mut sim = JobShopSim::new(instance).unwrap();

        let first = sim.step(SPT).unwrap(); // (1,1) = 2
        let second = sim.step(SPT).unwrap(); // (0,0) = 3, nothing else left
        assert!(!first.done);
        assert!(second.done);
        // Absent slots keep zero finish time and zero utilization.
        assert_eq!(sim.finish_time()[0][1], 0);
        assert_eq!(sim.finish_time()[1][0], 0);
        let obs = sim.observation();
        assert_eq!(obs.utilization[0][1], 0.0);
        assert_eq!(obs.utilization[1][0], 0.0);
    }

    #[test]
    fn test_recorder_sees_reset_and_every_step() {
        let handle = MemoryRecorder::new();
        let mut sim = JobShopSim::new(two_by_two())
            .unwrap()
            .with_recorder(handle.clone());
        sim.reset();
        sim.step(MWKR).unwrap();
        sim.step(SPT).unwrap();

        // new() records nothing (no recorder yet): one reset + two steps.
        let history = handle.snapshots();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].scheduled, None);
        assert_eq!(history[0].make_span, 0);
        assert_eq!(history[1].scheduled, Some((0, 0)));
        assert_eq!(history[2].scheduled, Some((1, 1)));
        assert_eq!(history[2].make_span, 4);
    }

    #[test]
    fn test_reset_options_metadata() {
        let mut sim = two_by_two_sim();
        assert_eq!(sim.episode_count(), 0);
        assert_eq!(sim.phase(), "train");

        sim.reset_with(ResetOptions::new().with_episode(7).with_phase("eval"));
        assert_eq!(sim.episode_count(), 7);
        assert_eq!(sim.phase(), "eval");

        // Plain reset keeps the phase and increments the episode.
        sim.reset();
        assert_eq!(sim.episode_count(), 8);
        assert_eq!(sim.phase(), "eval");
    }

    #[test]
    fn test_custom_catalog_bounds_action_space() {
        use crate::dispatching::{Rule, RuleCatalog, RuleKey};
        let catalog = RuleCatalog::new().with_rule(Rule::new("SPT", RuleKey::Spt));
        let mut sim = JobShopSim::new(two_by_two()).unwrap().with_catalog(catalog);

        assert!(sim.step(0).is_ok());
        let err = sim.step(1).unwrap_err();
        assert!(matches!(err, SimError::InvalidAction { action: 1, .. }));
    }
}
