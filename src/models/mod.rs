//! Simulation domain models.
//!
//! Core data types for the job-shop dispatching simulation: the static
//! problem definition ([`Instance`]) and the numeric state handed to
//! agents ([`Observation`]).
//!
//! # Domain Mapping
//!
//! | Type | Job-shop meaning |
//! |------|-----------------|
//! | `Instance` | Jobs, machine routing, processing and setup times |
//! | `Observation` | Normalized [3][J][M] view of the partial schedule |

mod instance;
mod observation;

pub use instance::Instance;
pub use observation::Observation;
