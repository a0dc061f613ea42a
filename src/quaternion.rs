/// A quaternion representing the armband's 3D orientation.
///
/// The sensor driver delivers one of these on every orientation event. It
/// consists of:
/// - A scalar component (w): represents the amount of rotation
/// - Three vector components (x,y,z): represent the axis of rotation
///
/// Properties:
/// - w is 1 and x,y,z are 0 for the reference (zero-rotation) orientation
/// - Magnitude should be 1 for a pure rotation (normalized)
///
/// Unit norm is a precondition on the caller. Nothing in this crate rejects a
/// non-unit quaternion; downstream stages clamp instead.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct Quaternion {
    /// Scalar (real) component
    pub w: f32,
    /// X (i) component - roll axis
    pub x: f32,
    /// Y (j) component - pitch axis
    pub y: f32,
    /// Z (k) component - yaw axis
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The zero-rotation orientation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }
}
