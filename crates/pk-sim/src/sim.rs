//! The `ParkingSim` struct and its tick loop.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use pk_citizen::{ActorDirectory, CitizenInstanceStore, ExtPathState, ParkingAiConfig};
use pk_core::{CitizenId, InstanceId, PathId, Tick, WorldPos};
use pk_path::{LaneIndex, PathUnitPool};

use crate::{PathWorker, SimConfig, SimError, SimObserver, SimResult, WorkerReport};

/// Counters for one processed tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    pub worker:    WorkerReport,
    /// Return paths that reached `Ready` or `Failed`.
    pub resolved:  usize,
    /// Return paths released for calculating too long.
    pub timed_out: usize,
    /// Return paths released because their slot was no longer live.
    pub reclaimed: usize,
}

/// Harness bookkeeping for a return path held by one slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Outstanding {
    path:  PathId,
    /// Tick the harness first saw the path.
    since: Tick,
    /// Citizen occupying the slot when the path was taken.
    owner: Option<CitizenId>,
}

/// Drives every citizen's return path forward once per tick.
///
/// Each [`step`](Self::step):
///
/// 1. **Work** — the [`PathWorker`] resolves some queued path units.
/// 2. **Poll** — every live instance in `Calculating` polls its return path.
///    Slots the directory no longer reports live, or that now hold a
///    different citizen than when the path was taken, have their record
///    reset so the path is neither leaked nor inherited.
/// 3. **Timeout** — paths still calculating after
///    `config.return_path_timeout_ticks` are released.  The clock starts at
///    [`request_return_path`](Self::request_return_path), or on the first
///    tick that sees a path started directly on a record.
/// 4. **Advance** the tick.
///
/// All state is owned here and mutated from the single thread calling
/// `step`, which is the write discipline the per-agent records assume.
pub struct ParkingSim<D: ActorDirectory> {
    pub config:    SimConfig,
    pub parking:   ParkingAiConfig,
    pub now:       Tick,
    pub instances: CitizenInstanceStore,
    pub paths:     PathUnitPool,
    pub lanes:     LaneIndex,
    pub directory: D,
    worker:        PathWorker,
    outstanding:   FxHashMap<InstanceId, Outstanding>,
}

impl<D: ActorDirectory> ParkingSim<D> {
    pub fn new(config: SimConfig, parking: ParkingAiConfig, directory: D, lanes: LaneIndex) -> SimResult<Self> {
        config.validate()?;
        parking.validate()?;
        Ok(Self {
            instances:    CitizenInstanceStore::new(config.instance_capacity),
            paths:        PathUnitPool::new(config.path_pool_capacity),
            worker:       PathWorker::new(&config),
            outstanding:  FxHashMap::default(),
            now:          Tick::ZERO,
            config,
            parking,
            directory,
            lanes,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Start the return path for `instance` and remember when it began and
    /// which citizen asked for it.
    pub fn request_return_path(&mut self, instance: InstanceId, park_pos: WorldPos, target_pos: WorldPos) -> SimResult<PathId> {
        if !self.directory.is_instance_valid(instance) {
            return Err(SimError::StaleInstance(instance));
        }
        let record = self.instances.get_mut(instance)?;
        let result = record.calculate_return_path(park_pos, target_pos, &mut self.paths, &self.lanes, &self.parking);
        // Any earlier path was released either way.
        self.outstanding.remove(&instance);
        let path = result?;
        let owner = self.directory.resolve_citizen(instance);
        self.outstanding.insert(instance, Outstanding { path, since: self.now, owner });
        Ok(path)
    }

    /// Reset `instance`'s record before its slot is given to a new agent.
    pub fn recycle(&mut self, instance: InstanceId) -> SimResult<()> {
        self.instances.reset(instance, &mut self.paths)?;
        self.outstanding.remove(&instance);
        Ok(())
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one tick and advance the clock.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.now;
        observer.on_tick_start(now);

        let mut report = TickReport { worker: self.worker.step(&mut self.paths)?, ..TickReport::default() };

        for record in self.instances.iter_mut() {
            let id = record.instance_id();
            let Some(path) = record.return_path() else {
                self.outstanding.remove(&id);
                continue;
            };

            let owner = self.directory.resolve_citizen(id);
            let seen = self.outstanding.entry(id).or_insert(Outstanding { path, since: now, owner });
            if seen.path != path {
                *seen = Outstanding { path, since: now, owner };
            }
            let seen = *seen;

            if !record.is_valid(&self.directory) || seen.owner != owner {
                trace!(instance = id.0, path = path.0, "reclaiming return path of stale instance");
                record.reset(&mut self.paths);
                self.outstanding.remove(&id);
                report.reclaimed += 1;
                continue;
            }
            if record.return_path_state() != ExtPathState::Calculating {
                continue;
            }

            let state = record.update_return_path_state(&self.paths);
            if state != ExtPathState::Calculating {
                observer.on_return_path_resolved(now, id, state);
                report.resolved += 1;
                continue;
            }

            let Some(limit) = self.config.return_path_timeout_ticks else { continue };
            if now.since(seen.since) >= limit {
                debug!(instance = id.0, waited = now.since(seen.since), "return path timed out");
                record.release_return_path(&mut self.paths);
                self.outstanding.remove(&id);
                observer.on_return_path_timeout(now, id);
                report.timed_out += 1;
            }
        }

        observer.on_tick_end(now, &report);
        trace!(
            tick = now.0,
            completed = report.worker.completed,
            failed = report.worker.failed,
            resolved = report.resolved,
            timed_out = report.timed_out,
            "tick processed"
        );
        self.now = now.next();
        Ok(report)
    }
}
