//! Hand gestures as reported by the armband's pose classifier.
//!
//! Classification happens on the device or in its driver; this crate only
//! consumes the label.

use core::fmt::{Display, Formatter};

/// A classified hand pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gesture {
    /// Relaxed hand, the rest pose.
    Neutral,
    /// The classifier has no confident label.
    #[default]
    Unknown,
    /// Closed fist.
    FistLike,
    /// Fingers spread wide.
    SpreadLike,
    /// Any other recognised pose (waves, taps).
    Other,
}

/// How the driver should keep the armband unlocked after a pose event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnlockRequest {
    /// Stay unlocked until told otherwise and give the wearer haptic
    /// feedback that the pose registered.
    Hold,
    /// Extend the short timed unlock so the next pose can still be captured.
    Timed,
}

impl UnlockRequest {
    /// Whether the wearer should be notified (vibration) for this request.
    pub const fn notify_user(self) -> bool {
        matches!(self, UnlockRequest::Hold)
    }
}

impl Gesture {
    /// A recognised pose other than rest.
    pub const fn is_active(self) -> bool {
        !matches!(self, Gesture::Neutral | Gesture::Unknown)
    }

    pub const fn unlock_request(self) -> UnlockRequest {
        if self.is_active() {
            UnlockRequest::Hold
        } else {
            UnlockRequest::Timed
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Gesture::Neutral => "rest",
            Gesture::Unknown => "unknown",
            Gesture::FistLike => "fist",
            Gesture::SpreadLike => "fingersSpread",
            Gesture::Other => "other",
        }
    }
}

impl Display for Gesture {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}
