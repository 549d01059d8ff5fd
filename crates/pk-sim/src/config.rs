//! Harness configuration.

use crate::{SimError, SimResult};

/// Top-level harness configuration.
///
/// Typically loaded from a TOML/JSON file by the application (with the
/// `serde` feature) and passed to [`ParkingSim::new`][crate::ParkingSim::new].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed for the path worker.  Same seed, same run.
    pub seed: u64,

    /// Number of citizen-instance slots.
    pub instance_capacity: usize,

    /// Maximum path units the pool holds at once.
    pub path_pool_capacity: usize,

    /// Pending units the worker looks at per tick.
    pub worker_budget: usize,

    /// Per-tick chance that a looked-at unit finishes.
    pub path_completion_chance: f64,

    /// Chance that a finishing unit finishes as failed.
    pub path_failure_chance: f64,

    /// Release a return path still calculating after this many ticks.
    /// `None` waits forever.
    pub return_path_timeout_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            instance_capacity: 1_024,
            path_pool_capacity: 4_096,
            worker_budget: 64,
            path_completion_chance: 0.5,
            path_failure_chance: 0.1,
            return_path_timeout_ticks: Some(64),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        for (name, p) in [
            ("path_completion_chance", self.path_completion_chance),
            ("path_failure_chance", self.path_failure_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::Config(format!("{name} must be within [0, 1], got {p}")));
            }
        }
        if self.path_pool_capacity == 0 {
            return Err(SimError::Config("path_pool_capacity must be non-zero".into()));
        }
        Ok(())
    }
}
