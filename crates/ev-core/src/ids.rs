use core::fmt;
use core::num::NonZeroU32;

use crate::{EvError, EvResult};

/// Compact, stable identifier for an entry in an input slice.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized, which matters for
///   Kiva instances that may or may not reference a wall
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create an Id from a slice position, rejecting positions that do not fit.
    pub fn from_usize(index: usize) -> EvResult<Self> {
        if index >= u32::MAX as usize {
            return Err(EvError::TooManyEntries {
                what: "ids",
                count: index + 1,
            });
        }
        Ok(Self::from_index(index as u32))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a slice position.
    pub fn position(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Position of a foundation wall within its foundation-space group.
pub type WallId = Id;
/// Position of a slab within its foundation-space group.
pub type SlabId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.position(), i as usize);
        }
    }

    #[test]
    fn option_wall_id_is_small() {
        assert_eq!(
            core::mem::size_of::<WallId>(),
            core::mem::size_of::<Option<WallId>>()
        );
    }

    #[test]
    fn from_usize_rejects_overflow() {
        assert!(Id::from_usize(3).is_ok());
        assert!(Id::from_usize(u32::MAX as usize).is_err());
    }
}
