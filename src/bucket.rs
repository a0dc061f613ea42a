//! Angle quantization
//!
//! Each Euler angle is mapped linearly onto a small integer range so the
//! steering rules and the bar display can work with coarse positions instead
//! of raw radians:
//!
//! ```text
//! bucket = floor((angle - min) / span * resolution)   clamped to [0, resolution - 1]
//! ```
//!
//! Roll and yaw span a full turn (-π..π), pitch spans a half turn (-π/2..π/2).

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::error::ConfigError;

/// Number of buckets per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution(u8);

impl Resolution {
    /// Resolution used by the reference steering rules.
    pub const REFERENCE: Self = Self(18);

    /// Smallest resolution that still has a distinct centre bucket.
    pub const MIN: u8 = 2;

    pub const fn new(buckets: u8) -> Result<Self, ConfigError> {
        if buckets < Self::MIN {
            Err(ConfigError::InvalidResolution(buckets))
        } else {
            Ok(Self(buckets))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The highest valid bucket, `resolution - 1`.
    pub const fn max_bucket(self) -> AngleBucket {
        AngleBucket(self.0 - 1)
    }

    /// The bucket a zero angle falls into on every axis.
    pub const fn center(self) -> AngleBucket {
        AngleBucket(self.0 / 2)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A quantized angle in `[0, resolution)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleBucket(u8);

impl AngleBucket {
    pub const ZERO: Self = Self(0);

    /// Clamps an arbitrary integer into the valid bucket range.
    pub fn clamped(raw: i32, resolution: Resolution) -> Self {
        let max = i32::from(resolution.max_bucket().0);
        // in range after the clamp, so the cast is lossless
        Self(raw.clamp(0, max) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<AngleBucket> for i32 {
    fn from(bucket: AngleBucket) -> Self {
        i32::from(bucket.0)
    }
}

impl From<AngleBucket> for usize {
    fn from(bucket: AngleBucket) -> Self {
        usize::from(bucket.0)
    }
}

/// The three decoded axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Roll,
    Pitch,
    Yaw,
}

impl Axis {
    /// Lower bound of the axis range in radians.
    pub const fn min(self) -> f32 {
        match self {
            Axis::Roll | Axis::Yaw => -PI,
            Axis::Pitch => -FRAC_PI_2,
        }
    }

    /// Width of the axis range in radians.
    pub const fn span(self) -> f32 {
        match self {
            Axis::Roll | Axis::Yaw => TAU,
            Axis::Pitch => PI,
        }
    }
}

/// Quantizes `angle` (radians) for the given axis.
///
/// Out-of-range and NaN angles never produce an out-of-range bucket: anything
/// past either end clamps to the nearest edge and NaN lands in bucket 0.
pub fn quantize(angle: f32, axis: Axis, resolution: Resolution) -> AngleBucket {
    let scaled = (angle - axis.min()) / axis.span() * f32::from(resolution.get());
    if scaled.is_nan() {
        return AngleBucket::ZERO;
    }
    // float-to-int `as` saturates, infinities included
    AngleBucket::clamped(libm::floorf(scaled) as i32, resolution)
}

/// Buckets for roll, pitch and yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buckets {
    pub roll: AngleBucket,
    pub pitch: AngleBucket,
    pub yaw: AngleBucket,
}

impl Buckets {
    /// The buckets of the zero-rotation orientation.
    pub const fn centered(resolution: Resolution) -> Self {
        let c = resolution.center();
        Self {
            roll: c,
            pitch: c,
            yaw: c,
        }
    }

    pub const fn get(&self, axis: Axis) -> AngleBucket {
        match axis {
            Axis::Roll => self.roll,
            Axis::Pitch => self.pitch,
            Axis::Yaw => self.yaw,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::{quantize, AngleBucket, Axis, Buckets, Resolution};
    use crate::error::ConfigError;

    const R: Resolution = Resolution::REFERENCE;

    #[test]
    fn test_resolution_validation() {
        assert_eq!(Resolution::new(1), Err(ConfigError::InvalidResolution(1)));
        assert_eq!(Resolution::new(0), Err(ConfigError::InvalidResolution(0)));
        assert_eq!(Resolution::new(18).map(Resolution::get), Ok(18));
        assert_eq!(Resolution::default(), R);
    }

    #[test]
    fn test_zero_angle_is_center_bucket() {
        assert_eq!(quantize(0.0, Axis::Roll, R).value(), 9);
        assert_eq!(quantize(0.0, Axis::Pitch, R).value(), 9);
        assert_eq!(quantize(0.0, Axis::Yaw, R).value(), 9);
        assert_eq!(R.center().value(), 9);
    }

    #[test]
    fn test_range_edges_clamp() {
        assert_eq!(quantize(PI, Axis::Roll, R).value(), 17);
        assert_eq!(quantize(PI, Axis::Yaw, R).value(), 17);
        assert_eq!(quantize(FRAC_PI_2, Axis::Pitch, R).value(), 17);
        assert_eq!(quantize(-PI, Axis::Roll, R).value(), 0);
        assert_eq!(quantize(-FRAC_PI_2, Axis::Pitch, R).value(), 0);
    }

    #[test]
    fn test_garbage_angles_stay_in_range() {
        assert_eq!(quantize(f32::NAN, Axis::Yaw, R), AngleBucket::ZERO);
        assert_eq!(quantize(f32::INFINITY, Axis::Yaw, R).value(), 17);
        assert_eq!(quantize(f32::NEG_INFINITY, Axis::Pitch, R).value(), 0);
        assert_eq!(quantize(100.0, Axis::Roll, R).value(), 17);
    }

    #[test]
    fn test_quantization_is_monotonic() {
        for axis in [Axis::Roll, Axis::Pitch, Axis::Yaw] {
            let mut previous = quantize(axis.min(), axis, R);
            for step in 1..=720 {
                let angle = axis.min() + axis.span() * step as f32 / 720.0;
                let bucket = quantize(angle, axis, R);
                assert!(bucket >= previous, "{:?} not monotonic at {}", axis, angle);
                previous = bucket;
            }
        }
    }

    #[test]
    fn test_every_bucket_is_reachable() {
        let mut seen = [false; 18];
        for step in 0..=1800 {
            let angle = -PI + 2.0 * PI * step as f32 / 1800.0;
            seen[usize::from(quantize(angle, Axis::Yaw, R))] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_clamped_bucket() {
        assert_eq!(AngleBucket::clamped(-4, R).value(), 0);
        assert_eq!(AngleBucket::clamped(42, R).value(), 17);
        assert_eq!(AngleBucket::clamped(13, R).value(), 13);
    }

    #[test]
    fn test_centered_buckets() {
        let b = Buckets::centered(R);
        assert_eq!(b.get(Axis::Roll), R.center());
        assert_eq!(b.get(Axis::Pitch), R.center());
        assert_eq!(b.get(Axis::Yaw), R.center());
    }
}
