//! `pk-path` — path-finding and lane-resolution contracts.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`request`]  | `PathRequest` descriptor, `ExtPathType`                        |
//! | [`service`]  | `PathService` trait (submit / poll / release), `PathFlags`     |
//! | [`pool`]     | `PathUnitPool` — fixed-capacity in-memory `PathService`        |
//! | [`resolver`] | `LocationResolver` trait, `LaneQuery`, rstar-backed `LaneIndex`|
//! | [`error`]    | `PathError`, `PathResult<T>`                                   |
//!
//! # Pluggability
//!
//! Callers program against the two traits.  The host simulation plugs in its
//! real path-finder and map; `PathUnitPool` and `LaneIndex` exist so the
//! state machine built on top can run in tests and in the tick harness
//! without one.  Neither computes actual routes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod pool;
pub mod request;
pub mod resolver;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use pool::{PathUnit, PathUnitPool};
pub use request::{ExtPathType, PathRequest};
pub use resolver::{LaneAnchor, LaneIndex, LaneQuery, LocationResolver, Service};
pub use service::{PathFlags, PathService};
