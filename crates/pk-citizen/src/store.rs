//! The `CitizenInstanceStore` — one [`ExtCitizenInstance`] per instance slot.

use pk_core::{CoreError, CoreResult, InstanceId, PathId};
use pk_path::PathService;

use crate::ExtCitizenInstance;

/// Arena of per-agent parking state, indexed by [`InstanceId`].
///
/// The `instances` vector always holds one record per slot, so slot `i`
/// belongs to `InstanceId(i)` for the lifetime of the store.  Records are
/// never dropped when an agent despawns; the slot's record must be
/// [`reset`](Self::reset) before the slot is handed to a new agent, or its
/// return path leaks.
///
/// # Write discipline
///
/// Each record is written by exactly one simulation step per tick.  The
/// store hands out `&mut ExtCitizenInstance` only through `&mut self`, so
/// two writers to the same record cannot coexist.
pub struct CitizenInstanceStore {
    instances: Vec<ExtCitizenInstance>,
}

impl CitizenInstanceStore {
    /// Create `capacity` zero-initialized records (capped at the last
    /// addressable `InstanceId`).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(InstanceId::INVALID.index());
        Self {
            instances: (0..capacity as u16)
                .map(|i| ExtCitizenInstance::new(InstanceId(i)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, id: InstanceId) -> CoreResult<&ExtCitizenInstance> {
        self.instances.get(id.index()).ok_or(CoreError::InstanceOutOfRange(id))
    }

    pub fn get_mut(&mut self, id: InstanceId) -> CoreResult<&mut ExtCitizenInstance> {
        self.instances.get_mut(id.index()).ok_or(CoreError::InstanceOutOfRange(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtCitizenInstance> {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ExtCitizenInstance> {
        self.instances.iter_mut()
    }

    /// Reset the record for `id` (see [`ExtCitizenInstance::reset`]).
    pub fn reset<P: PathService + ?Sized>(&mut self, id: InstanceId, paths: &mut P) -> CoreResult<()> {
        self.get_mut(id)?.reset(paths);
        Ok(())
    }

    /// Release every held return path, e.g. before the path service is torn
    /// down.  Returns how many were released.
    pub fn release_all<P: PathService + ?Sized>(&mut self, paths: &mut P) -> usize {
        let mut released = 0;
        for inst in &mut self.instances {
            if inst.return_path().is_some() {
                released += 1;
            }
            inst.release_return_path(paths);
        }
        released
    }

    /// `(instance, path)` for every record currently holding a return path.
    pub fn outstanding_return_paths(&self) -> impl Iterator<Item = (InstanceId, PathId)> + '_ {
        self.instances
            .iter()
            .filter_map(|i| i.return_path().map(|p| (i.instance_id(), p)))
    }
}
