//! Per-agent extended path state.

use std::fmt;

use tracing::{debug, trace, warn};

use pk_core::{CitizenId, InstanceId, PathId, PathPosition, WorldPos};
use pk_path::{ExtPathType, LocationResolver, PathRequest, PathService};

use crate::{
    ActorDirectory, Endpoint, ExtParkingSpaceLocation, ExtPathMode, ExtPathState,
    ParkingAiConfig, ParkingSpaceLocation, ReturnPathError, ReturnPathResult,
};

/// Outcome of [`ExtCitizenInstance::record_parking_failure`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParkingRetry {
    /// Look for another space; the car path should restart from
    /// `resume_from` when one is known.
    Retry { resume_from: Option<PathPosition> },
    /// Too many occupied spaces in a row.
    GiveUp { attempts: u32 },
}

/// Parking-AI state attached to one citizen instance.
///
/// The record tracks the journey phase, the chosen parking space, how often
/// parking failed, and at most one pedestrian *return path* (from the parked
/// car to the final target) that is computed asynchronously by a
/// [`PathService`].
///
/// # Return-path invariants
///
/// * `return_path` is `Some` exactly while a requested path has not been
///   released.
/// * `return_path_state` is `Calculating` only while `return_path` is `Some`;
///   `Ready` and `Failed` stay put until the next release.
///
/// Both fields are private so only the methods below can move them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtCitizenInstance {
    instance_id: InstanceId,

    /// Current journey phase.
    pub path_mode: ExtPathMode,

    failed_parking_attempts: u32,

    /// Where the chosen parking space is.
    pub parking_space: ParkingSpaceLocation,

    /// Where a car path restarts from when parking fails.  Not cleared by
    /// [`reset`](Self::reset).
    pub parking_path_start_position: Option<PathPosition>,

    return_path: Option<PathId>,
    return_path_state: ExtPathState,

    /// Last measured distance to the parked car.  `f32::MAX` after a reset
    /// means unknown.
    pub last_distance_to_parked_car: f32,
}

impl ExtCitizenInstance {
    /// A zero-initialized record for `instance_id`.
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            path_mode: ExtPathMode::None,
            failed_parking_attempts: 0,
            parking_space: ParkingSpaceLocation::None,
            parking_path_start_position: None,
            return_path: None,
            return_path_state: ExtPathState::None,
            last_distance_to_parked_car: 0.0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    #[inline]
    pub fn failed_parking_attempts(&self) -> u32 {
        self.failed_parking_attempts
    }

    #[inline]
    pub fn parking_space_location(&self) -> ExtParkingSpaceLocation {
        self.parking_space.kind()
    }

    #[inline]
    pub fn parking_space_location_id(&self) -> u16 {
        self.parking_space.raw_id()
    }

    #[inline]
    pub fn return_path(&self) -> Option<PathId> {
        self.return_path
    }

    #[inline]
    pub fn return_path_state(&self) -> ExtPathState {
        self.return_path_state
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// `true` while the directory still considers this slot live.
    pub fn is_valid<D: ActorDirectory + ?Sized>(&self, directory: &D) -> bool {
        directory.is_instance_valid(self.instance_id)
    }

    /// Durable citizen behind this slot.
    pub fn citizen_id<D: ActorDirectory + ?Sized>(&self, directory: &D) -> Option<CitizenId> {
        directory.resolve_citizen(self.instance_id)
    }

    /// Which path-finding subsystem the current mode needs.
    #[inline]
    pub fn path_type(&self) -> ExtPathType {
        self.path_mode.path_type()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Restart the journey: mode, parking bookkeeping and distance are
    /// cleared and the return path is released.
    ///
    /// `parking_path_start_position` is kept.
    pub fn reset<P: PathService + ?Sized>(&mut self, paths: &mut P) {
        trace!(instance = self.instance_id.0, "resetting ext. citizen instance");
        self.path_mode = ExtPathMode::None;
        self.failed_parking_attempts = 0;
        self.parking_space = ParkingSpaceLocation::None;
        self.last_distance_to_parked_car = f32::MAX;
        self.release_return_path(paths);
    }

    /// Hand the return path back to `paths`, if one is held.  Always leaves
    /// the state at `None`.  Calling it again is a no-op.
    pub fn release_return_path<P: PathService + ?Sized>(&mut self, paths: &mut P) {
        if let Some(path) = self.return_path.take() {
            debug!(
                instance = self.instance_id.0,
                path = path.0,
                state = ?self.return_path_state,
                "releasing return path"
            );
            paths.release_path(path);
        }
        self.return_path_state = ExtPathState::None;
    }

    /// Poll the return path.  Only a held path in `Calculating` is queried;
    /// it moves to `Ready` or `Failed` once the service says so and is left
    /// alone otherwise.
    ///
    /// Returns the state after polling.
    pub fn update_return_path_state<P: PathService + ?Sized>(&mut self, paths: &P) -> ExtPathState {
        let Some(path) = self.return_path else {
            return self.return_path_state;
        };
        if self.return_path_state != ExtPathState::Calculating {
            return self.return_path_state;
        }

        let flags = paths.query_flags(path);
        if flags.ready {
            self.return_path_state = ExtPathState::Ready;
            trace!(instance = self.instance_id.0, path = path.0, "return path succeeded");
        } else if flags.failed {
            self.return_path_state = ExtPathState::Failed;
            debug!(instance = self.instance_id.0, path = path.0, "return path failed");
        }
        self.return_path_state
    }

    /// Start computing the walking path from `park_pos` to `target_pos`.
    ///
    /// Any held return path is released first.  Both positions are snapped
    /// to the nearest pedestrian lane within
    /// `config.max_building_to_pedestrian_lane_distance`; if either misses,
    /// or the service refuses the request, nothing is held afterwards.
    pub fn calculate_return_path<P, L>(
        &mut self,
        park_pos:   WorldPos,
        target_pos: WorldPos,
        paths:      &mut P,
        resolver:   &L,
        config:     &ParkingAiConfig,
    ) -> ReturnPathResult<PathId>
    where
        P: PathService + ?Sized,
        L: LocationResolver + ?Sized,
    {
        self.release_return_path(paths);

        let query = config.pedestrian_lane_query();
        let resolve = |endpoint: Endpoint, pos: WorldPos| {
            resolver
                .find_nearest_lane_position(pos, &query)
                .ok_or(ReturnPathError::Unresolved { endpoint, pos })
        };
        let located = resolve(Endpoint::Park, park_pos)
            .and_then(|park| resolve(Endpoint::Target, target_pos).map(|target| (park, target)));
        let (park_path_pos, target_path_pos) = match located {
            Ok(positions) => positions,
            Err(e) => {
                debug!(instance = self.instance_id.0, error = %e, "cannot place return path");
                return Err(e);
            }
        };

        let request = PathRequest::walking_only(park_path_pos, target_path_pos, config.max_return_path_length);
        let path = paths.submit_path(request).map_err(|e| {
            warn!(instance = self.instance_id.0, error = %e, "return path submission failed");
            ReturnPathError::Submission(e)
        })?;

        debug!(
            instance = self.instance_id.0,
            path = path.0,
            from = %park_path_pos,
            to = %target_path_pos,
            "return path-finding started"
        );
        self.return_path = Some(path);
        self.return_path_state = ExtPathState::Calculating;
        Ok(path)
    }

    // ── Parking bookkeeping ───────────────────────────────────────────────

    pub fn set_parking_space(&mut self, location: ParkingSpaceLocation) {
        self.parking_space = location;
    }

    pub fn clear_parking_space(&mut self) {
        self.parking_space = ParkingSpaceLocation::None;
    }

    pub fn set_parking_path_start_position(&mut self, position: Option<PathPosition>) {
        self.parking_path_start_position = position;
    }

    /// Record the distance between the citizen and its parked car and
    /// return it.
    pub fn update_distance_to_parked_car(&mut self, citizen_pos: WorldPos, car_pos: WorldPos) -> f32 {
        self.last_distance_to_parked_car = citizen_pos.distance(car_pos);
        self.last_distance_to_parked_car
    }

    /// The chosen space was occupied on arrival.
    ///
    /// Bumps the failure counter.  Within `config.max_parking_attempts` the
    /// mode becomes `ParkingFailed` and the caller should search again from
    /// the returned start position; beyond it the mode is left for the
    /// caller to change.
    pub fn record_parking_failure(&mut self, config: &ParkingAiConfig) -> ParkingRetry {
        self.failed_parking_attempts = self.failed_parking_attempts.saturating_add(1);
        let attempts = self.failed_parking_attempts;

        if attempts > config.max_parking_attempts {
            debug!(instance = self.instance_id.0, attempts, "giving up on parking");
            return ParkingRetry::GiveUp { attempts };
        }
        debug!(instance = self.instance_id.0, attempts, space = %self.parking_space, "parking failed, retrying");
        self.path_mode = ExtPathMode::ParkingFailed;
        ParkingRetry::Retry { resume_from: self.parking_path_start_position }
    }
}

impl fmt::Display for ExtCitizenInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ExtCitizenInstance")?;
        writeln!(f, "\tinstance_id = {}", self.instance_id.0)?;
        writeln!(f, "\tpath_mode = {}", self.path_mode)?;
        writeln!(f, "\tfailed_parking_attempts = {}", self.failed_parking_attempts)?;
        writeln!(f, "\tparking_space_location_id = {}", self.parking_space_location_id())?;
        writeln!(f, "\tparking_space_location = {:?}", self.parking_space_location())?;
        match self.parking_path_start_position {
            Some(p) => writeln!(f, "\tparking_path_start_position = {p}")?,
            None    => writeln!(f, "\tparking_path_start_position = none")?,
        }
        writeln!(f, "\treturn_path_id = {}", self.return_path.map_or(0, |p| p.0))?;
        writeln!(f, "\treturn_path_state = {:?}", self.return_path_state)?;
        writeln!(f, "\tlast_distance_to_parked_car = {}", self.last_distance_to_parked_car)?;
        write!(f, "ExtCitizenInstance]")
    }
}
