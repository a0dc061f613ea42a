//! Callback table for the sensor driver
//!
//! The driver owns the device connection and calls these methods from its
//! own event context as events arrive. Every method has a no-op default, so
//! an implementor only overrides the events it cares about.

use crate::arm::Arm;
use crate::gesture::{Gesture, UnlockRequest};
use crate::quaternion::Quaternion;

pub trait SensorListener {
    /// New orientation sample.
    fn on_orientation(&mut self, _quat: Quaternion) {}

    /// New pose classification. The returned request tells the driver how to
    /// keep the device unlocked.
    fn on_pose(&mut self, gesture: Gesture) -> UnlockRequest {
        gesture.unlock_request()
    }

    /// Sync gesture recognised; the band knows which arm it is on.
    fn on_arm_sync(&mut self, _arm: Arm) {}

    /// Band moved from its calibrated position.
    fn on_arm_unsync(&mut self) {}

    fn on_unlock(&mut self) {}

    fn on_lock(&mut self) {}

    /// Device connection lost.
    fn on_unpair(&mut self) {}
}
