//! `pk-citizen` — per-agent parking path-state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                              |
//! |---------------|-----------------------------------------------------------------------|
//! | [`mode`]      | `ExtPathMode`, `ExtPathState`, `ExtSoftPathState`, parking locations  |
//! | [`state`]     | `ExtCitizenInstance` — one agent's state machine, `ParkingRetry`      |
//! | [`store`]     | `CitizenInstanceStore` — arena of records indexed by `InstanceId`     |
//! | [`directory`] | `ActorDirectory` trait, `InstanceRegistry`                            |
//! | [`config`]    | `ParkingAiConfig`                                                     |
//! | [`error`]     | `ReturnPathError`, `CitizenError`                                     |
//!
//! # Return-path lifecycle
//!
//! A citizen that parks away from its target needs a walking path from the
//! car to the target.  That path is computed asynchronously:
//!
//! 1. `ExtCitizenInstance::calculate_return_path` releases any old path,
//!    snaps both ends to pedestrian lanes and submits a walking-only request.
//!    The state becomes `Calculating`.
//! 2. Once per tick the caller invokes `update_return_path_state`, which polls
//!    the [`PathService`][pk_path::PathService] and moves to `Ready` or
//!    `Failed` when the service reports completion.
//! 3. `release_return_path` (or `reset`) hands the path back.  Nothing here
//!    times out; a caller that wants a deadline tracks ticks itself.
//!
//! Collaborators are always passed in explicitly, which keeps every
//! operation testable against fakes.

pub mod config;
pub mod directory;
pub mod error;
pub mod mode;
pub mod state;
pub mod store;


pub use config::ParkingAiConfig;
pub use directory::{ActorDirectory, InstanceRegistry};
pub use error::{CitizenError, Endpoint, ReturnPathError, ReturnPathResult};
pub use mode::{
    ExtParkingSpaceLocation, ExtPathMode, ExtPathState, ExtSoftPathState, ParkingSpaceLocation,
    convert_path_state_to_soft_path_state,
};
pub use state::{ExtCitizenInstance, ParkingRetry};
pub use store::CitizenInstanceStore;
