//! Dispatching rules and the action catalog.
//!
//! Provides priority-based dispatching rules (SPT, LPT, MWKR, EST, ...)
//! over the unscheduled slots of the grid, and the fixed [`RuleCatalog`]
//! that maps an agent's integer action to a concrete rule.
//!
//! A rule is a pure function of the current state view
//! ([`DispatchContext`]) to one eligible (job, slot) coordinate; the
//! state machine applies the coordinate, the rule never mutates anything.
//!
//! # Usage
//!
//! ```
//! use jobshop_sim::dispatching::{DispatchContext, RuleCatalog};
//!
//! let catalog = RuleCatalog::standard();
//! assert_eq!(catalog.len(), 18);
//!
//! let remaining = vec![vec![3, 2], vec![4, 1]];
//! let routing = vec![vec![0, 1], vec![1, 0]];
//! let machine_finish = vec![0, 0];
//! let ctx = DispatchContext {
//!     remaining_time: &remaining,
//!     routing: &routing,
//!     machine_finish: &machine_finish,
//!     make_span: 0,
//! };
//! assert_eq!(catalog.get(0).unwrap().select(&ctx), Some((1, 1))); // SPT
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod rules;

pub use context::DispatchContext;
pub use rules::{Rule, RuleCatalog, RuleKey};
