//! Text rendering for a console or serial display.
//!
//! Both renderers implement [`Display`], so they can be written to any
//! `core::fmt::Write` sink without allocating:
//!
//! ```text
//! [*********         ][*********         ][*************     ][unlocked][R][fist          ] Forward Right
//! ```
//!
//! With the yaw readout enabled the yaw bar also ends with the bucket and its
//! distance to the top of the range, `[*************     13 5]`.

use core::fmt::{Display, Formatter, Write};

use crate::bucket::{Axis, Buckets, Resolution};
use crate::engine::EngineSnapshot;

/// Width of the gesture name field.
const GESTURE_FIELD: usize = 14;

/// One bar per axis, `resolution` cells wide, filled up to the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketBars {
    pub buckets: Buckets,
    pub resolution: Resolution,
    /// Append `bucket resolution-bucket` inside the yaw bar.
    pub yaw_readout: bool,
}

impl BucketBars {
    pub const fn new(buckets: Buckets, resolution: Resolution) -> Self {
        Self {
            buckets,
            resolution,
            yaw_readout: false,
        }
    }

    pub const fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self::new(snapshot.buckets, snapshot.resolution)
    }

    pub fn with_yaw_readout(self) -> Self {
        Self {
            yaw_readout: true,
            ..self
        }
    }
}

fn repeat(f: &mut Formatter<'_>, c: char, n: usize) -> core::fmt::Result {
    for _ in 0..n {
        f.write_char(c)?;
    }
    Ok(())
}

impl Display for BucketBars {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let width = usize::from(self.resolution.get());
        for axis in [Axis::Roll, Axis::Pitch, Axis::Yaw] {
            let filled = usize::from(self.buckets.get(axis)).min(width);
            f.write_char('[')?;
            repeat(f, '*', filled)?;
            repeat(f, ' ', width - filled)?;
            if self.yaw_readout && axis == Axis::Yaw {
                write!(f, "{} {}", filled, width - filled)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }
}

/// Bars, then lock/arm/gesture fields and the command once the band is on an
/// arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub snapshot: EngineSnapshot,
    pub yaw_readout: bool,
}

impl StatusLine {
    pub const fn new(snapshot: EngineSnapshot) -> Self {
        Self {
            snapshot,
            yaw_readout: false,
        }
    }

    pub fn with_yaw_readout(self) -> Self {
        Self {
            yaw_readout: true,
            ..self
        }
    }
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let snap = &self.snapshot;
        let bars = BucketBars {
            yaw_readout: self.yaw_readout,
            ..BucketBars::from_snapshot(snap)
        };
        bars.fmt(f)?;

        if let Some(arm) = snap.arm.synced {
            let lock = if snap.arm.unlocked { "unlocked" } else { "locked  " };
            write!(
                f,
                "[{}][{}][{:<width$}] {}",
                lock,
                arm.letter(),
                snap.gesture,
                snap.command,
                width = GESTURE_FIELD
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BucketBars, StatusLine};
    use crate::arm::Arm;
    use crate::bucket::{AngleBucket, Buckets, Resolution};
    use crate::config::{SteeringConfig, SteeringZones};
    use crate::engine::SteeringEngine;
    use crate::gesture::Gesture;
    use crate::listener::SensorListener;
    use crate::quaternion::Quaternion;

    const R: Resolution = Resolution::REFERENCE;

    #[test]
    fn test_center_bars() {
        let text = BucketBars::new(Buckets::centered(R), R).to_string();
        let bar = "[*********         ]";
        assert_eq!(text, format!("{bar}{bar}{bar}"));
    }

    #[test]
    fn test_empty_and_full_bars() {
        let buckets = Buckets {
            roll: AngleBucket::ZERO,
            pitch: R.max_bucket(),
            yaw: AngleBucket::clamped(3, R),
        };
        let text = BucketBars::new(buckets, R).to_string();
        assert_eq!(
            text,
            "[                  ][***************** ][***               ]"
        );
    }

    #[test]
    fn test_yaw_readout() {
        let buckets = Buckets {
            roll: R.center(),
            pitch: R.center(),
            yaw: AngleBucket::clamped(13, R),
        };
        let text = BucketBars::new(buckets, R).with_yaw_readout().to_string();
        assert!(text.ends_with("[*************     13 5]"), "{}", text);
        // roll and pitch bars stay plain
        assert!(text.starts_with("[*********         ][*********         ][*"));
    }

    #[test]
    fn test_status_line_uses_engine_resolution() {
        let config = SteeringConfig::new(Resolution::new(36).unwrap(), SteeringZones::REFERENCE)
            .unwrap();
        let engine = SteeringEngine::new(config);
        let line = StatusLine::new(engine.snapshot()).to_string();
        assert_eq!(line.len(), 3 * 38);

        let line = StatusLine::new(engine.snapshot()).with_yaw_readout().to_string();
        assert!(line.ends_with("18 18]"), "{}", line);
    }

    #[test]
    fn test_status_line_without_arm_shows_bars_only() {
        let engine = SteeringEngine::default();
        let line = StatusLine::new(engine.snapshot()).to_string();
        assert_eq!(line.len(), 3 * 20);
    }

    #[test]
    fn test_status_line_on_arm() {
        let mut engine = SteeringEngine::default();
        engine.on_orientation(Quaternion::IDENTITY);
        engine.on_arm_sync(Arm::Right);
        engine.on_unlock();
        engine.on_pose(Gesture::FistLike);

        let line = StatusLine::new(engine.snapshot()).to_string();
        assert!(line.ends_with("[unlocked][R][fist          ] Forward Straight"), "{}", line);

        engine.on_lock();
        let line = StatusLine::new(engine.snapshot()).to_string();
        assert!(line.contains("[locked  ][R]"));
    }
}
