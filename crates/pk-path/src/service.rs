//! The `PathService` trait — asynchronous submit / poll / release.

use pk_core::PathId;

use crate::{PathRequest, PathResult};

/// Completion flags of a path computation.
///
/// Both `false` means still pending (or unknown to the service).  A service
/// should never report both, but readers give `ready` precedence if it does.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFlags {
    pub ready:  bool,
    pub failed: bool,
}

impl PathFlags {
    pub const PENDING: PathFlags = PathFlags { ready: false, failed: false };
    pub const READY:   PathFlags = PathFlags { ready: true,  failed: false };
    pub const FAILED:  PathFlags = PathFlags { ready: false, failed: true  };

    #[inline]
    pub fn is_pending(self) -> bool {
        !self.ready && !self.failed
    }
}

/// Asynchronous path-computation engine.
///
/// Computations run on the service's own schedule, possibly across many
/// ticks; callers never block.  A returned [`PathId`] is owned exclusively by
/// whoever submitted it until they hand it back with
/// [`release_path`](Self::release_path).
pub trait PathService {
    /// Queue a computation.  Fails when the service cannot accept more work.
    fn submit_path(&mut self, request: PathRequest) -> PathResult<PathId>;

    /// Give back `path`.  Releasing a computation that is still running is a
    /// best-effort cancellation; the caller does not wait for it.
    fn release_path(&mut self, path: PathId);

    /// Current completion flags of `path`.
    fn query_flags(&self, path: PathId) -> PathFlags;
}
