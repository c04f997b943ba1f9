//! The two-vehicle fleet and its capacity ordering.

use thiserror::Error;

/// Weight capacities of the two delivery vehicles.
///
/// The one-door vehicle is the smaller tier and is always planned first; the
/// constructor rejects capacities that would invert that ordering.
///
/// # Examples
/// ```
/// use cartage_core::Fleet;
///
/// # fn main() -> Result<(), cartage_core::FleetError> {
/// let fleet = Fleet::new(100, 150)?;
/// assert_eq!(fleet.one_door_capacity(), 100);
/// assert_eq!(fleet.two_door_capacity(), 150);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    one_door_capacity: u32,
    two_door_capacity: u32,
}

/// Errors returned by [`Fleet::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    /// The smaller vehicle was configured with the larger capacity.
    #[error(
        "one-door capacity {one_door} exceeds two-door capacity {two_door}; \
         the one-door vehicle is the smaller tier"
    )]
    TierOrder {
        /// Configured one-door capacity.
        one_door: u32,
        /// Configured two-door capacity.
        two_door: u32,
    },
}

impl Fleet {
    /// Validates and constructs a [`Fleet`].
    pub fn new(one_door_capacity: u32, two_door_capacity: u32) -> Result<Self, FleetError> {
        if one_door_capacity > two_door_capacity {
            return Err(FleetError::TierOrder {
                one_door: one_door_capacity,
                two_door: two_door_capacity,
            });
        }
        Ok(Self {
            one_door_capacity,
            two_door_capacity,
        })
    }

    /// Capacity of the smaller, first-planned vehicle.
    pub fn one_door_capacity(&self) -> u32 {
        self.one_door_capacity
    }

    /// Capacity of the larger, second-planned vehicle.
    pub fn two_door_capacity(&self) -> u32 {
        self.two_door_capacity
    }
}
