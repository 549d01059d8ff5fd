//! `pk-sim` — tick harness for per-agent return paths.
//!
//! # Tick loop
//!
//! ```text
//! every tick:
//!   ① Work     — PathWorker resolves a budget of queued path units
//!                (seeded RNG: completion chance, failure chance).
//!   ② Poll     — each live instance in Calculating calls
//!                update_return_path_state; stale slots are reset.
//!   ③ Timeout  — paths calculating ≥ return_path_timeout_ticks
//!                are released.
//!   ④ Advance  — now = now + 1.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pk_citizen::{InstanceRegistry, ParkingAiConfig};
//! use pk_path::LaneIndex;
//! use pk_sim::{NoopObserver, ParkingSim, SimConfig};
//!
//! let mut sim = ParkingSim::new(SimConfig::default(), ParkingAiConfig::default(), registry, lanes)?;
//! sim.request_return_path(instance, parked_at, destination)?;
//! sim.run_ticks(10, &mut NoopObserver)?;
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod worker;


pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{ParkingSim, TickReport};
pub use worker::{PathWorker, WorkerReport};
