//! The actor directory: which instance slots are live and who owns them.

use pk_core::{CitizenId, InstanceId};

/// Registry validating transient instance slots and mapping them to durable
/// citizen identities.
///
/// Slots are recycled, so a stored `InstanceId` may point at a different
/// agent (or none) by the time it is read back.  Check
/// [`is_instance_valid`](Self::is_instance_valid) before trusting per-agent
/// state keyed by a remembered id.
pub trait ActorDirectory {
    fn is_instance_valid(&self, instance: InstanceId) -> bool;

    /// Durable citizen behind `instance`, `None` if the slot is not live.
    fn resolve_citizen(&self, instance: InstanceId) -> Option<CitizenId>;
}

/// Slot-vector [`ActorDirectory`].  Slot `i` is `InstanceId(i)`.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    slots: Vec<Option<CitizenId>>,
}

impl InstanceRegistry {
    /// A registry with `capacity` empty slots (capped at the last
    /// addressable `InstanceId`).
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![None; capacity.min(InstanceId::INVALID.index())] }
    }

    /// Put `citizen` into the lowest free slot.  `None` when full.
    pub fn spawn(&mut self, citizen: CitizenId) -> Option<InstanceId> {
        let i = self.slots.iter().position(Option::is_none)?;
        self.slots[i] = Some(citizen);
        InstanceId::try_from(i).ok()
    }

    /// Free `instance`, returning the citizen that held it.
    pub fn despawn(&mut self, instance: InstanceId) -> Option<CitizenId> {
        self.slots.get_mut(instance.index()).and_then(Option::take)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl ActorDirectory for InstanceRegistry {
    fn is_instance_valid(&self, instance: InstanceId) -> bool {
        matches!(self.slots.get(instance.index()), Some(Some(_)))
    }

    fn resolve_citizen(&self, instance: InstanceId) -> Option<CitizenId> {
        self.slots.get(instance.index()).copied().flatten()
    }
}
