//! Command resolution
//!
//! Two independent classifications combined into one [`MovementCommand`]:
//! the lateral part from the yaw bucket, the longitudinal part from the
//! gesture. Nothing is remembered between calls.

use crate::bucket::AngleBucket;
use crate::command::{Lateral, Longitudinal, MovementCommand};
use crate::config::SteeringConfig;
use crate::gesture::Gesture;

/// Maps a gesture and a yaw bucket to a movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct CommandResolver {
    config: SteeringConfig,
}

impl CommandResolver {
    pub const fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Resolves the command for the given inputs.
    ///
    /// `yaw_bucket` may come from anywhere; values outside the configured
    /// resolution are clamped to the nearest valid bucket first.
    pub fn resolve(&self, gesture: Gesture, yaw_bucket: i32) -> MovementCommand {
        MovementCommand {
            lateral: self.lateral_from_yaw(yaw_bucket),
            longitudinal: longitudinal_from_gesture(gesture),
        }
    }

    /// Steering decision. The first matching rule wins:
    ///
    /// 1. inside the right zone → [`Lateral::TurnRight`]
    /// 2. inside the left zone → [`Lateral::TurnLeft`]
    /// 3. bucket 0 or the centre bucket → [`Lateral::Straight`]
    /// 4. anything else → [`Lateral::Idle`]
    pub fn lateral_from_yaw(&self, yaw_bucket: i32) -> Lateral {
        let resolution = self.config.resolution();
        let bucket = AngleBucket::clamped(yaw_bucket, resolution);
        let zones = self.config.zones();

        if zones.right.contains(bucket) {
            Lateral::TurnRight
        } else if zones.left.contains(bucket) {
            Lateral::TurnLeft
        } else if bucket == AngleBucket::ZERO || bucket == resolution.center() {
            Lateral::Straight
        } else {
            Lateral::Idle
        }
    }
}

/// Drive decision: fist drives forward, spread fingers reverse.
pub const fn longitudinal_from_gesture(gesture: Gesture) -> Option<Longitudinal> {
    match gesture {
        Gesture::FistLike => Some(Longitudinal::Forward),
        Gesture::SpreadLike => Some(Longitudinal::Reverse),
        Gesture::Neutral | Gesture::Unknown | Gesture::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{longitudinal_from_gesture, CommandResolver};
    use crate::bucket::Resolution;
    use crate::command::{Lateral, Longitudinal, MovementCommand};
    use crate::config::{OpenRange, SteeringConfig, SteeringZones};
    use crate::decoder::OrientationDecoder;
    use crate::gesture::Gesture;
    use crate::quaternion::Quaternion;

    #[test]
    fn test_fist_at_center_drives_straight_forward() {
        let r = CommandResolver::default();
        assert_eq!(
            r.resolve(Gesture::FistLike, 9),
            MovementCommand::new(Lateral::Straight, Some(Longitudinal::Forward))
        );
    }

    #[test]
    fn test_spread_in_right_zone() {
        let r = CommandResolver::default();
        assert_eq!(
            r.resolve(Gesture::SpreadLike, 13),
            MovementCommand::new(Lateral::TurnRight, Some(Longitudinal::Reverse))
        );
    }

    #[test]
    fn test_unknown_gesture_has_no_drive() {
        let r = CommandResolver::default();
        assert_eq!(
            r.resolve(Gesture::Unknown, 3),
            MovementCommand::new(Lateral::TurnLeft, None)
        );
        assert_eq!(r.resolve(Gesture::Unknown, 8), MovementCommand::IDLE);
    }

    #[test]
    fn test_lateral_table() {
        let r = CommandResolver::default();
        let expected = [
            Lateral::Straight, // 0
            Lateral::TurnLeft,
            Lateral::TurnLeft,
            Lateral::TurnLeft,
            Lateral::TurnLeft, // 4
            Lateral::Idle,
            Lateral::Idle,
            Lateral::Idle,
            Lateral::Idle,
            Lateral::Straight, // 9, centre
            Lateral::Idle,
            Lateral::Idle,
            Lateral::Idle, // 12
            Lateral::TurnRight,
            Lateral::TurnRight,
            Lateral::TurnRight, // 15
            Lateral::Idle,
            Lateral::Idle, // 17
        ];
        for (bucket, lateral) in expected.iter().enumerate() {
            assert_eq!(r.lateral_from_yaw(bucket as i32), *lateral, "bucket {}", bucket);
        }
    }

    #[test]
    fn test_out_of_range_buckets_are_clamped() {
        let r = CommandResolver::default();
        for g in [Gesture::FistLike, Gesture::Other] {
            assert_eq!(r.resolve(g, -5), r.resolve(g, 0));
            assert_eq!(r.resolve(g, i32::MIN), r.resolve(g, 0));
            assert_eq!(r.resolve(g, 99), r.resolve(g, 17));
            assert_eq!(r.resolve(g, i32::MAX), r.resolve(g, 17));
        }
    }

    #[test]
    fn test_half_turn_heading_resolves_consistently() {
        let r = CommandResolver::default();
        for w in [-1e-9, 0.0, 1e-9] {
            let mut d = OrientationDecoder::default();
            d.update(Quaternion::new(w, 0.0, 0.0, 1.0));
            let yaw = i32::from(d.current_yaw_bucket());
            assert_eq!(r.resolve(Gesture::Unknown, yaw), MovementCommand::IDLE, "w = {}", w);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let r = CommandResolver::default();
        let before = r;
        let first = r.resolve(Gesture::SpreadLike, 14);
        let second = r.resolve(Gesture::SpreadLike, 14);
        assert_eq!(first, second);
        assert_eq!(r, before);
    }

    #[test]
    fn test_longitudinal_mapping() {
        assert_eq!(longitudinal_from_gesture(Gesture::FistLike), Some(Longitudinal::Forward));
        assert_eq!(longitudinal_from_gesture(Gesture::SpreadLike), Some(Longitudinal::Reverse));
        assert_eq!(longitudinal_from_gesture(Gesture::Neutral), None);
        assert_eq!(longitudinal_from_gesture(Gesture::Unknown), None);
        assert_eq!(longitudinal_from_gesture(Gesture::Other), None);
    }

    #[test]
    fn test_custom_zones() {
        let zones = SteeringZones {
            right: OpenRange::new(20, 30),
            left: OpenRange::new(2, 10),
        };
        let config = SteeringConfig::new(Resolution::new(36).unwrap(), zones).unwrap();
        let r = CommandResolver::new(config);

        assert_eq!(r.lateral_from_yaw(25), Lateral::TurnRight);
        assert_eq!(r.lateral_from_yaw(5), Lateral::TurnLeft);
        assert_eq!(r.lateral_from_yaw(18), Lateral::Straight);
        assert_eq!(r.lateral_from_yaw(1), Lateral::Idle);
        assert_eq!(r.lateral_from_yaw(40), Lateral::Idle);
    }
}
