//! Simulated path worker.
//!
//! Stands in for the path-finding threads of a real engine: each tick it
//! looks at up to `budget` queued units and, at random, marks some of them
//! computed or failed.  Randomness comes from a seeded [`SimRng`], so a run
//! is reproducible.

use pk_core::{PathId, SimRng};
use pk_path::PathUnitPool;

use crate::{SimConfig, SimResult};

/// Units the worker finished during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct WorkerReport {
    pub completed: usize,
    pub failed:    usize,
}

pub struct PathWorker {
    rng:               SimRng,
    budget:            usize,
    completion_chance: f64,
    failure_chance:    f64,
}

impl PathWorker {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            rng:               SimRng::new(config.seed),
            budget:            config.worker_budget,
            completion_chance: config.path_completion_chance,
            failure_chance:    config.path_failure_chance,
        }
    }

    /// Process one tick's worth of queued units.
    pub fn step(&mut self, pool: &mut PathUnitPool) -> SimResult<WorkerReport> {
        let mut report = WorkerReport::default();
        let batch: Vec<PathId> = pool.pending().take(self.budget).collect();
        for path in batch {
            if !self.rng.gen_bool(self.completion_chance) {
                continue;
            }
            if self.rng.gen_bool(self.failure_chance) {
                pool.fail(path)?;
                report.failed += 1;
            } else {
                pool.complete(path)?;
                report.completed += 1;
            }
        }
        Ok(report)
    }
}
