//! Lane addressing and lane/vehicle type masks shared by every path-related
//! crate.
//!
//! Masks are plain bit sets.  An empty mask (`NONE`) is meaningful: a
//! walking path carries `VehicleTypes::NONE`, and a resolver query with an
//! empty secondary lane mask has no secondary lanes.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::SegmentId;

// ── PathPosition ──────────────────────────────────────────────────────────────

/// A position on the lane network: which lane of which segment, and how far
/// along it (`offset` 0..=255 spans the whole lane).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPosition {
    pub segment: SegmentId,
    pub lane:    u8,
    pub offset:  u8,
}

impl PathPosition {
    #[inline]
    pub fn new(segment: SegmentId, lane: u8, offset: u8) -> Self {
        Self { segment, lane, offset }
    }
}

impl fmt::Display for PathPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[seg={} lane={} off={}]", self.segment.0, self.lane, self.offset)
    }
}

// ── Masks ─────────────────────────────────────────────────────────────────────

macro_rules! type_mask {
    ($(#[$attr:meta])* $vis:vis struct $name:ident { $($flag:ident = $bit:expr,)* }) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            pub const NONE: $name = $name(0);
            $(pub const $flag: $name = $name(1 << $bit);)*

            #[inline]
            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// `true` if any bit is set in both masks.
            #[inline]
            pub fn intersects(self, other: $name) -> bool {
                self.0 & other.0 != 0
            }
        }

        impl BitOr for $name {
            type Output = $name;
            #[inline]
            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }
    };
}

type_mask! {
    /// Which kinds of lane a path or a lane query may use.
    pub struct LaneTypes {
        VEHICLE          = 0,
        PEDESTRIAN       = 1,
        PARKING          = 2,
        PUBLIC_TRANSPORT = 3,
        CARGO_VEHICLE    = 4,
    }
}

type_mask! {
    /// Which vehicle classes a path or a lane query applies to.
    pub struct VehicleTypes {
        CAR     = 0,
        METRO   = 1,
        TRAIN   = 2,
        TRAM    = 3,
        BICYCLE = 4,
        SHIP    = 5,
    }
}
