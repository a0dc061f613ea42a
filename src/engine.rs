//! Steering engine
//!
//! Ties the decoder and the resolver to the driver's event stream. The driver
//! feeds it through [`SensorListener`]; the control loop calls
//! [`SteeringEngine::poll`] on its own tick (20 Hz in the reference setup).
//!
//! ```
//! use gesture_steer::{Gesture, Lateral, Longitudinal, Quaternion, SensorListener, SteeringEngine};
//!
//! let mut engine = SteeringEngine::default();
//! engine.on_orientation(Quaternion::IDENTITY);
//! engine.on_pose(Gesture::FistLike);
//!
//! let cmd = engine.poll();
//! assert_eq!(cmd.lateral, Lateral::Straight);
//! assert_eq!(cmd.longitudinal, Some(Longitudinal::Forward));
//! ```

use crate::arm::{Arm, ArmState};
use crate::bucket::{Buckets, Resolution};
use crate::command::MovementCommand;
use crate::config::SteeringConfig;
use crate::decoder::OrientationDecoder;
use crate::gesture::{Gesture, UnlockRequest};
use crate::listener::SensorListener;
use crate::quaternion::Quaternion;
use crate::resolver::CommandResolver;

/// Everything a display or actuator needs from one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub buckets: Buckets,
    /// Resolution the buckets were quantized with.
    pub resolution: Resolution,
    pub gesture: Gesture,
    pub arm: ArmState,
    pub command: MovementCommand,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SteeringEngine {
    decoder: OrientationDecoder,
    resolver: CommandResolver,
    gesture: Gesture,
    arm: ArmState,
}

impl SteeringEngine {
    pub const fn new(config: SteeringConfig) -> Self {
        Self {
            decoder: OrientationDecoder::new(config.resolution()),
            resolver: CommandResolver::new(config),
            gesture: Gesture::Unknown,
            arm: ArmState::DETACHED,
        }
    }

    /// Current command from the cached orientation and gesture.
    pub fn poll(&self) -> MovementCommand {
        let yaw = self.decoder.current_yaw_bucket();
        self.resolver.resolve(self.gesture, i32::from(yaw))
    }

    /// Like [`SteeringEngine::poll`], but `None` while the band is not on an arm.
    pub fn poll_gated(&self) -> Option<MovementCommand> {
        self.arm.is_on_arm().then(|| self.poll())
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            buckets: self.decoder.buckets(),
            resolution: self.decoder.resolution(),
            gesture: self.gesture,
            arm: self.arm,
            command: self.poll(),
        }
    }

    pub fn decoder(&self) -> &OrientationDecoder {
        &self.decoder
    }

    pub fn resolver(&self) -> &CommandResolver {
        &self.resolver
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn arm(&self) -> ArmState {
        self.arm
    }
}

impl Default for SteeringEngine {
    fn default() -> Self {
        Self::new(SteeringConfig::REFERENCE)
    }
}

impl SensorListener for SteeringEngine {
    fn on_orientation(&mut self, quat: Quaternion) {
        self.decoder.update(quat);
    }

    fn on_pose(&mut self, gesture: Gesture) -> UnlockRequest {
        if gesture != self.gesture {
            debug!("pose {} -> {}", self.gesture, gesture);
        }
        self.gesture = gesture;
        gesture.unlock_request()
    }

    fn on_arm_sync(&mut self, arm: Arm) {
        info!("synced to {} arm", arm);
        self.arm.synced = Some(arm);
    }

    fn on_arm_unsync(&mut self) {
        info!("arm unsynced");
        self.arm.synced = None;
    }

    fn on_unlock(&mut self) {
        trace!("unlocked");
        self.arm.unlocked = true;
    }

    fn on_lock(&mut self) {
        trace!("locked");
        self.arm.unlocked = false;
    }

    fn on_unpair(&mut self) {
        warn!("device unpaired, clearing orientation and arm state");
        self.arm = ArmState::DETACHED;
        self.gesture = Gesture::Unknown;
        self.decoder.reset();
    }
}
