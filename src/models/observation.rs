//! Observation tensor handed to the decision-making agent.
//!
//! Three parallel channels, each shaped `[job][slot]`, normalized into
//! `[0, 1]`. Observations are freshly materialized copies: the state
//! machine keeps exclusive ownership of the canonical arrays, so a caller
//! can hold observations from different steps without aliasing.

use serde::{Deserialize, Serialize};

/// A `[3][J][M]` observation snapshot.
///
/// - `remaining`: remaining processing time, scaled by the episode-wide
///   maximum augmented processing time (fixed divisor, so values are
///   comparable across the whole episode).
/// - `finish`: absolute finish times, scaled by the current make-span.
/// - `utilization`: per-slot machine utilization of scheduled slots.
///
/// Every entry is finite; degenerate normalization (make-span still zero)
/// yields an all-zero channel instead of a division failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Remaining-time channel.
    pub remaining: Vec<Vec<f32>>,
    /// Finish-time channel.
    pub finish: Vec<Vec<f32>>,
    /// Utilization channel.
    pub utilization: Vec<Vec<f32>>,
}

impl Observation {
    /// Shape as `(channels, jobs, slots)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        let jobs = self.remaining.len();
        let slots = self.remaining.first().map(Vec::len).unwrap_or(0);
        (3, jobs, slots)
    }

    /// The three channels in order: remaining, finish, utilization.
    pub fn channels(&self) -> [&Vec<Vec<f32>>; 3] {
        [&self.remaining, &self.finish, &self.utilization]
    }

    /// Flattens to channel-major `Vec<f32>` for feeding tensor consumers.
    pub fn to_flat(&self) -> Vec<f32> {
        let (_, jobs, slots) = self.shape();
        let mut flat = Vec::with_capacity(3 * jobs * slots);
        for channel in self.channels() {
            for row in channel.iter() {
                flat.extend_from_slice(row);
            }
        }
        flat
    }

    /// Whether every entry is finite (no NaN or infinity in any channel).
    pub fn is_finite(&self) -> bool {
        self.channels()
            .iter()
            .flat_map(|c| c.iter())
            .flatten()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Observation {
        Observation {
            remaining: vec![vec![1.0, 0.5], vec![0.0, 0.25]],
            finish: vec![vec![0.0, 0.0], vec![0.0, 1.0]],
            utilization: vec![vec![0.0, 0.0], vec![0.0, 0.75]],
        }
    }

    #[test]
    fn test_shape() {
        assert_eq!(sample().shape(), (3, 2, 2));
    }

    #[test]
    fn test_to_flat_channel_major() {
        let flat = sample().to_flat();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[..4], &[1.0, 0.5, 0.0, 0.25]);
        assert_eq!(flat[7], 1.0); // Last entry of the finish channel
        assert_eq!(flat[11], 0.75); // Last entry of the utilization channel
    }

    #[test]
    fn test_is_finite() {
        let mut obs = sample();
        assert!(obs.is_finite());
        obs.finish[0][0] = f32::NAN;
        assert!(!obs.is_finite());
    }
}
