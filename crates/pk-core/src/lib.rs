//! `pk-core` — foundational types for the parking path-state workspace.
//!
//! This crate is a dependency of every other `pk-*` crate.  It has no `pk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`ids`]     | `InstanceId`, `CitizenId`, `SegmentId`, `BuildingId`, `PathId` |
//! | [`geo`]     | `WorldPos` (3-D world point), Euclidean distance               |
//! | [`lane`]    | `PathPosition`, `LaneTypes`, `VehicleTypes` masks              |
//! | [`time`]    | `Tick`                                                         |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                               |
//! | [`error`]   | `CoreError`, `CoreResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod lane;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::WorldPos;
pub use ids::{BuildingId, CitizenId, InstanceId, PathId, SegmentId};
pub use lane::{LaneTypes, PathPosition, VehicleTypes};
pub use rng::SimRng;
pub use time::Tick;
