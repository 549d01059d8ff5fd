//! `PathUnitPool` — a fixed-capacity, in-memory [`PathService`].
//!
//! # Slot layout
//!
//! Units live in a slot vector; `PathId(n)` addresses slot `n - 1`, so the
//! raw value `0` is never handed out.  Released slots go on a free list and
//! are reused by later submissions.
//!
//! # Scheduling
//!
//! Nothing here computes a route.  Submitted units wait in a FIFO queue
//! (`skip_queue` requests jump to the front) until a worker marks them with
//! [`complete`](PathUnitPool::complete) or [`fail`](PathUnitPool::fail).

use std::collections::VecDeque;

use tracing::trace;

use pk_core::PathId;

use crate::{PathError, PathFlags, PathRequest, PathResult, PathService};

/// Slot `i` is `PathId(i + 1)`, and `PathId::INVALID` is never issued.
const MAX_UNITS: usize = (PathId::INVALID.0 - 1) as usize;

/// One allocated path computation.
#[derive(Clone, Debug)]
pub struct PathUnit {
    pub request: PathRequest,
    pub flags:   PathFlags,
}

/// Slot pool of [`PathUnit`]s plus the queue of units awaiting a worker.
pub struct PathUnitPool {
    capacity:  usize,
    units:     Vec<Option<PathUnit>>,
    free_list: Vec<usize>,
    queue:     VecDeque<PathId>,
}

impl PathUnitPool {
    /// Create a pool that holds at most `capacity` units at once (capped so
    /// every slot maps to a valid `PathId`).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity:  capacity.min(MAX_UNITS),
            units:     Vec::new(),
            free_list: Vec::new(),
            queue:     VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of allocated units (pending or resolved).
    pub fn in_use(&self) -> usize {
        self.units.len() - self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_use() == 0
    }

    /// Units still waiting for a worker, in queue order.
    pub fn pending(&self) -> impl Iterator<Item = PathId> + '_ {
        self.queue.iter().copied()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// The allocated unit behind `path`, if any.
    pub fn get(&self, path: PathId) -> Option<&PathUnit> {
        slot_index(path).and_then(|i| self.units.get(i)).and_then(Option::as_ref)
    }

    /// Mark a pending unit as successfully computed.
    pub fn complete(&mut self, path: PathId) -> PathResult<()> {
        self.resolve(path, PathFlags::READY)
    }

    /// Mark a pending unit as failed.
    pub fn fail(&mut self, path: PathId) -> PathResult<()> {
        self.resolve(path, PathFlags::FAILED)
    }

    fn resolve(&mut self, path: PathId, flags: PathFlags) -> PathResult<()> {
        let unit = slot_index(path)
            .and_then(|i| self.units.get_mut(i))
            .and_then(Option::as_mut)
            .ok_or(PathError::UnknownPath(path))?;
        if !unit.flags.is_pending() {
            return Err(PathError::AlreadyResolved(path));
        }
        unit.flags = flags;
        self.queue.retain(|&p| p != path);
        trace!(path = path.0, ready = flags.ready, failed = flags.failed, "path unit resolved");
        Ok(())
    }
}

impl PathService for PathUnitPool {
    fn submit_path(&mut self, request: PathRequest) -> PathResult<PathId> {
        let skip_queue = request.skip_queue;
        let unit = PathUnit { request, flags: PathFlags::PENDING };

        let index = match self.free_list.pop() {
            Some(i) => {
                self.units[i] = Some(unit);
                i
            }
            None if self.units.len() < self.capacity => {
                self.units.push(Some(unit));
                self.units.len() - 1
            }
            None => return Err(PathError::PoolExhausted { capacity: self.capacity }),
        };

        let path = PathId(index as u32 + 1);
        if skip_queue {
            self.queue.push_front(path);
        } else {
            self.queue.push_back(path);
        }
        trace!(path = path.0, queued = self.queue.len(), "path unit submitted");
        Ok(path)
    }

    fn release_path(&mut self, path: PathId) {
        let Some(index) = slot_index(path) else { return };
        let Some(slot) = self.units.get_mut(index) else { return };
        if slot.take().is_none() {
            return;
        }
        self.free_list.push(index);
        // Still-queued units are simply dropped: best-effort cancellation.
        self.queue.retain(|&p| p != path);
        trace!(path = path.0, "path unit released");
    }

    fn query_flags(&self, path: PathId) -> PathFlags {
        self.get(path).map(|u| u.flags).unwrap_or_default()
    }
}

#[inline]
fn slot_index(path: PathId) -> Option<usize> {
    path.0.checked_sub(1).map(|i| i as usize)
}
