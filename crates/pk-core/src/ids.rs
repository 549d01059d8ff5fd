//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into slot arenas via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! Raw value `0` is never produced for a live [`PathId`]; absence of a path is
//! expressed as `Option<PathId>` rather than a zero handle.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Transient citizen-instance slot.  Slots are recycled when an agent
    /// despawns, so an id is only meaningful while the directory reports it
    /// valid.
    pub struct InstanceId(u16);
}

typed_id! {
    /// Durable citizen identity backing an instance slot.
    pub struct CitizenId(u32);
}

typed_id! {
    /// Road segment index.
    pub struct SegmentId(u16);
}

typed_id! {
    /// Building index.
    pub struct BuildingId(u16);
}

typed_id! {
    /// Handle of a path computation owned by the path service.
    pub struct PathId(u32);
}
