//! Orientation decoding
//!
//! Holds the most recent orientation as Euler angles and their buckets.
//! Every [`OrientationDecoder::update`] overwrites the whole record; the
//! accessors only read it, so they can be polled at any rate.

use crate::bucket::{quantize, AngleBucket, Axis, Buckets, Resolution};
use crate::euler::EulerAngles;
use crate::quaternion::Quaternion;

/// Converts orientation quaternions to bucketed roll/pitch/yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct OrientationDecoder {
    resolution: Resolution,
    angles: EulerAngles,
    buckets: Buckets,
}

impl OrientationDecoder {
    /// A decoder at the zero-rotation orientation.
    pub const fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            angles: EulerAngles::ZERO,
            buckets: Buckets::centered(resolution),
        }
    }

    /// Decodes a new orientation sample.
    ///
    /// `q` should be unit length. A non-unit or NaN quaternion still produces
    /// in-range buckets, just meaningless ones.
    pub fn update(&mut self, q: Quaternion) {
        let angles = EulerAngles::from(q);
        self.buckets = Buckets {
            roll: quantize(angles.roll, Axis::Roll, self.resolution),
            pitch: quantize(angles.pitch, Axis::Pitch, self.resolution),
            yaw: quantize(angles.yaw, Axis::Yaw, self.resolution),
        };
        self.angles = angles;
    }

    /// Back to the zero-rotation orientation, as after construction.
    pub fn reset(&mut self) {
        *self = Self::new(self.resolution);
    }

    pub fn current_roll_bucket(&self) -> AngleBucket {
        self.buckets.roll
    }

    /// Decoded but not used for steering; exposed for display.
    pub fn current_pitch_bucket(&self) -> AngleBucket {
        self.buckets.pitch
    }

    pub fn current_yaw_bucket(&self) -> AngleBucket {
        self.buckets.yaw
    }

    pub fn buckets(&self) -> Buckets {
        self.buckets
    }

    pub fn angles(&self) -> EulerAngles {
        self.angles
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl Default for OrientationDecoder {
    fn default() -> Self {
        Self::new(Resolution::REFERENCE)
    }
}
