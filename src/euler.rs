//! Euler Angle Calculations
//!
//! Euler angles represent orientation using three angles:
//! - Roll: rotation around X, like tilting the wrist
//! - Pitch: rotation around Y, like raising or lowering the forearm
//! - Yaw: rotation around Z, like sweeping the arm left or right
//!
//! These are what the steering rules and the bar display work with; the
//! quaternion itself is never consulted past this point.

use core::f32::consts::{FRAC_PI_2, PI};

use crate::quaternion::Quaternion;

/// Orientation represented as Euler angles in radians.
///
/// Note: These angles experience gimbal lock when pitch approaches ±90°
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Side-to-side tilt (X axis), -π to π radians
    pub roll: f32,
    /// Forward/backward tilt (Y axis), -π/2 to π/2 radians
    pub pitch: f32,
    /// Rotation around vertical (Z) axis, -π to π radians
    pub yaw: f32,
}

impl EulerAngles {
    pub const ZERO: Self = Self {
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Computes the pitch angle from the raw `asin` argument `2(wy - zx)`.
///
/// Floating-point drift on a nearly-vertical arm can push the argument past
/// ±1, where `asin` is undefined. The argument is clamped first, so 1.2
/// yields exactly π/2.
pub fn pitch_from_sine(sine: f32) -> f32 {
    let clamped = sine.clamp(-1.0, 1.0);
    if clamped >= 1.0 {
        FRAC_PI_2
    } else if clamped <= -1.0 {
        -FRAC_PI_2
    } else {
        libm::asinf(clamped)
    }
}

/// Folds an `atan2` result into (-π, π].
///
/// `atan2` can return exactly -π (negative-zero or tiny negative `y` with
/// negative `x`), which is the same heading as π.
pub fn wrap_half_open(angle: f32) -> f32 {
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

impl From<Quaternion> for EulerAngles {
    /// Converts a quaternion to Euler angles.
    ///
    /// The conversion uses these formulas:
    /// - roll  = atan2(2(qw*qx + qy*qz), 1 - 2(qx² + qy²))
    /// - pitch = asin(clamp(2(qw*qy - qz*qx), -1, 1))
    /// - yaw   = atan2(2(qw*qz + qx*qy), 1 - 2(qy² + qz²))
    fn from(q: Quaternion) -> Self {
        Self {
            roll: wrap_half_open(libm::atan2f(
                2.0 * (q.w * q.x + q.y * q.z),
                1.0 - 2.0 * (q.x * q.x + q.y * q.y),
            )),
            pitch: pitch_from_sine(2.0 * (q.w * q.y - q.z * q.x)),
            yaw: wrap_half_open(libm::atan2f(
                2.0 * (q.w * q.z + q.x * q.y),
                1.0 - 2.0 * (q.y * q.y + q.z * q.z),
            )),
        }
    }
}
