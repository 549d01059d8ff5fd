//! Observer hooks for the tick harness.

use pk_citizen::ExtPathState;
use pk_core::{InstanceId, Tick};

use crate::TickReport;

/// Callbacks invoked by [`ParkingSim::step`][crate::ParkingSim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks only observe; nothing they do
/// changes how the harness advances.
///
/// # Example — failure counter
///
/// ```rust,ignore
/// struct Failures(usize);
///
/// impl SimObserver for Failures {
///     fn on_return_path_resolved(&mut self, _tick: Tick, _inst: InstanceId, state: ExtPathState) {
///         if state == ExtPathState::Failed {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A return path left `Calculating` this tick (`state` is `Ready` or
    /// `Failed`).
    fn on_return_path_resolved(&mut self, _tick: Tick, _instance: InstanceId, _state: ExtPathState) {}

    /// A return path was released because it calculated for too long.
    fn on_return_path_timeout(&mut self, _tick: Tick, _instance: InstanceId) {}

    /// Called at the end of each tick with its counters.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
