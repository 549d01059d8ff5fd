//! Closed enumerations describing where an agent is in its journey.

use std::fmt;

use pk_core::{BuildingId, SegmentId};
use pk_path::ExtPathType;

use crate::CitizenError;

// ── ExtPathMode ───────────────────────────────────────────────────────────────

/// Phase of a combined drive-then-walk journey.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ExtPathMode {
    #[default]
    None = 0,
    RequiresWalkingPathToParkedCar = 1,
    CalculatingWalkingPathToParkedCar = 2,
    WalkingToParkedCar = 3,
    ApproachingParkedCar = 4,
    RequiresCarPath = 5,
    CalculatingCarPathToTarget = 6,
    CalculatingCarPathToKnownParkPos = 7,
    CalculatingCarPathToAltParkPos = 8,
    DrivingToTarget = 9,
    DrivingToKnownParkPos = 10,
    DrivingToAltParkPos = 11,
    ParkingFailed = 12,
    RequiresWalkingPathToTarget = 13,
    CalculatingWalkingPathToTarget = 14,
    WalkingToTarget = 15,
    PublicTransportToTarget = 16,
    TaxiToTarget = 17,
}

impl ExtPathMode {
    pub const ALL: [ExtPathMode; 18] = [
        ExtPathMode::None,
        ExtPathMode::RequiresWalkingPathToParkedCar,
        ExtPathMode::CalculatingWalkingPathToParkedCar,
        ExtPathMode::WalkingToParkedCar,
        ExtPathMode::ApproachingParkedCar,
        ExtPathMode::RequiresCarPath,
        ExtPathMode::CalculatingCarPathToTarget,
        ExtPathMode::CalculatingCarPathToKnownParkPos,
        ExtPathMode::CalculatingCarPathToAltParkPos,
        ExtPathMode::DrivingToTarget,
        ExtPathMode::DrivingToKnownParkPos,
        ExtPathMode::DrivingToAltParkPos,
        ExtPathMode::ParkingFailed,
        ExtPathMode::RequiresWalkingPathToTarget,
        ExtPathMode::CalculatingWalkingPathToTarget,
        ExtPathMode::WalkingToTarget,
        ExtPathMode::PublicTransportToTarget,
        ExtPathMode::TaxiToTarget,
    ];

    /// Which path-finding subsystem is relevant in this mode.
    pub fn path_type(self) -> ExtPathType {
        use ExtPathMode::*;
        match self {
            CalculatingCarPathToAltParkPos
            | CalculatingCarPathToKnownParkPos
            | CalculatingCarPathToTarget
            | DrivingToAltParkPos
            | DrivingToKnownParkPos
            | DrivingToTarget
            | RequiresCarPath
            | ParkingFailed => ExtPathType::DrivingOnly,

            CalculatingWalkingPathToParkedCar
            | CalculatingWalkingPathToTarget
            | RequiresWalkingPathToParkedCar
            | RequiresWalkingPathToTarget
            | ApproachingParkedCar
            | WalkingToParkedCar
            | WalkingToTarget => ExtPathType::WalkingOnly,

            None | PublicTransportToTarget | TaxiToTarget => ExtPathType::None,
        }
    }
}

impl TryFrom<u8> for ExtPathMode {
    type Error = CitizenError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        ExtPathMode::ALL
            .get(raw as usize)
            .copied()
            .ok_or(CitizenError::InvalidPathMode(raw))
    }
}

impl fmt::Display for ExtPathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ── Path states ───────────────────────────────────────────────────────────────

/// Lifecycle of an asynchronous path computation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtPathState {
    #[default]
    None,
    Calculating,
    Ready,
    Failed,
}

/// Superset of [`ExtPathState`] that also tells apart failures the caller
/// may retry (`FailedSoft`) from final ones (`FailedHard`).
///
/// The first four variants line up one-to-one with `ExtPathState`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtSoftPathState {
    #[default]
    None,
    Calculating,
    Ready,
    FailedHard,
    FailedSoft,
}

impl From<ExtPathState> for ExtSoftPathState {
    fn from(state: ExtPathState) -> Self {
        match state {
            ExtPathState::None        => ExtSoftPathState::None,
            ExtPathState::Calculating => ExtSoftPathState::Calculating,
            ExtPathState::Ready       => ExtSoftPathState::Ready,
            ExtPathState::Failed      => ExtSoftPathState::FailedHard,
        }
    }
}

impl TryFrom<ExtSoftPathState> for ExtPathState {
    type Error = CitizenError;

    fn try_from(state: ExtSoftPathState) -> Result<Self, Self::Error> {
        match state {
            ExtSoftPathState::None        => Ok(ExtPathState::None),
            ExtSoftPathState::Calculating => Ok(ExtPathState::Calculating),
            ExtSoftPathState::Ready       => Ok(ExtPathState::Ready),
            ExtSoftPathState::FailedHard  => Ok(ExtPathState::Failed),
            ExtSoftPathState::FailedSoft  => Err(CitizenError::NotNarrowable(state)),
        }
    }
}

/// Widen a strict path state into the soft-state enum.
#[inline]
pub fn convert_path_state_to_soft_path_state(state: ExtPathState) -> ExtSoftPathState {
    state.into()
}

// ── Parking space ─────────────────────────────────────────────────────────────

/// Kind of object holding a chosen parking space.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtParkingSpaceLocation {
    #[default]
    None,
    RoadSide,
    Building,
}

/// Where the chosen parking space is, kind and id together.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParkingSpaceLocation {
    #[default]
    None,
    RoadSide(SegmentId),
    Building(BuildingId),
}

impl ParkingSpaceLocation {
    pub fn kind(self) -> ExtParkingSpaceLocation {
        match self {
            ParkingSpaceLocation::None        => ExtParkingSpaceLocation::None,
            ParkingSpaceLocation::RoadSide(_) => ExtParkingSpaceLocation::RoadSide,
            ParkingSpaceLocation::Building(_) => ExtParkingSpaceLocation::Building,
        }
    }

    /// Raw segment or building id; `0` when there is no parking space.
    pub fn raw_id(self) -> u16 {
        match self {
            ParkingSpaceLocation::None        => 0,
            ParkingSpaceLocation::RoadSide(s) => s.0,
            ParkingSpaceLocation::Building(b) => b.0,
        }
    }
}

impl fmt::Display for ParkingSpaceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingSpaceLocation::None        => f.write_str("none"),
            ParkingSpaceLocation::RoadSide(s) => write!(f, "road-side {s}"),
            ParkingSpaceLocation::Building(b) => write!(f, "building {b}"),
        }
    }
}
