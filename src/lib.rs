//! Job-shop scheduling simulation with dispatching-rule actions.
//!
//! Models a job shop as a sequential decision process: each step applies one
//! priority dispatching rule, the rule resolves to a single operation, and
//! the operation is placed on its machine under job-precedence and
//! machine-exclusivity constraints. The step reward is the marginal change
//! in aggregate machine utilization, so episode returns telescope to the
//! final utilization ratio.
//!
//! # Modules
//!
//! - **`models`**: Problem data — `Instance` (processing times, machine
//!   routing, family setup times) and the 3-channel `Observation`
//! - **`validation`**: Structural integrity checks on instances
//! - **`dispatching`**: The rule catalog (SPT, LPT, LWKR, MWKR, ...) and the
//!   read-only context rules score against
//! - **`sim`**: The `JobShopSim` state machine with reset/step semantics,
//!   plus step recording hooks
//! - **`error`**: Error types for invalid actions and malformed instances
//!
//! # Example
//!
//! ```
//! use jobshop_sim::models::Instance;
//! use jobshop_sim::sim::JobShopSim;
//!
//! let instance = Instance::new(
//!     vec![vec![3, 2], vec![4, 1]],
//!     vec![vec![0, 1], vec![1, 0]],
//! );
//! let mut sim = JobShopSim::new(instance)?;
//! let mut total = 0.0;
//! while !sim.is_done() {
//!     total += sim.step(0)?.reward; // always SPT
//! }
//! assert!((total - sim.utilization_ratio()).abs() < 1e-12);
//! # Ok::<(), jobshop_sim::error::SimError>(())
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Haupt (1989), "A survey of priority rule-based scheduling"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod sim;
pub mod validation;

pub use error::SimError;
pub use models::{Instance, Observation};
pub use sim::{JobShopSim, ResetOptions, StepOutcome};
