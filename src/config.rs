//! Steering configuration
//!
//! The lateral rules work on yaw buckets. Holding the arm at the reference
//! heading puts yaw in the centre bucket; sweeping the arm moves it through
//! the buckets on either side:
//!
//! ```text
//! bucket   0   1 2 3 4   5 ... 12   13 14 15   16 17
//!          |   left  |    idle*   |  right   |  idle
//!       straight            (* centre bucket is straight)
//! ```
//!
//! Buckets 5..=12 (except the centre) and 16..=17 are dead zones that make no
//! lateral statement.

use crate::bucket::{AngleBucket, Resolution};
use crate::error::ConfigError;

/// An open bucket interval: `lo < bucket < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenRange {
    pub lo: u8,
    pub hi: u8,
}

impl OpenRange {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub const fn contains(&self, bucket: AngleBucket) -> bool {
        let v = bucket.value();
        v > self.lo && v < self.hi
    }

    /// At least one bucket inside, and none at or past `resolution`.
    const fn fits(&self, resolution: Resolution) -> bool {
        (self.lo as u16) + 1 < self.hi as u16 && self.hi <= resolution.get()
    }
}

/// Yaw bucket zones for the lateral rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringZones {
    /// Turn right while yaw is strictly inside this range.
    pub right: OpenRange,
    /// Turn left while yaw is strictly inside this range.
    pub left: OpenRange,
}

impl SteeringZones {
    pub const REFERENCE: Self = Self {
        right: OpenRange::new(12, 16),
        left: OpenRange::new(0, 5),
    };
}

impl Default for SteeringZones {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Everything the decoder and resolver need to agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringConfig {
    resolution: Resolution,
    zones: SteeringZones,
}

impl SteeringConfig {
    /// Reference behaviour: 18 buckets, right on (12, 16), left on (0, 5).
    pub const REFERENCE: Self = Self {
        resolution: Resolution::REFERENCE,
        zones: SteeringZones::REFERENCE,
    };

    /// Validates `zones` against `resolution`.
    pub const fn new(resolution: Resolution, zones: SteeringZones) -> Result<Self, ConfigError> {
        if !zones.right.fits(resolution) {
            return Err(ConfigError::InvalidZone {
                lo: zones.right.lo,
                hi: zones.right.hi,
            });
        }
        if !zones.left.fits(resolution) {
            return Err(ConfigError::InvalidZone {
                lo: zones.left.lo,
                hi: zones.left.hi,
            });
        }
        Ok(Self { resolution, zones })
    }

    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub const fn zones(&self) -> &SteeringZones {
        &self.zones
    }
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
