//! Gesture steering for remote-controlled vehicles.
//!
//! Turns the orientation and pose stream of a wearable motion-sensing armband
//! into discrete steering commands:
//!
//! 1. [`OrientationDecoder`] converts each orientation quaternion to
//!    roll/pitch/yaw and quantizes every angle into a small bucket range.
//! 2. [`CommandResolver`] maps the yaw bucket and the current [`Gesture`] to a
//!    [`MovementCommand`] (steering + drive).
//! 3. [`SteeringEngine`] holds the latest state between driver callbacks and
//!    control-loop polls; [`shared::SharedEngine`] guards it with a lock when
//!    those run in different contexts.
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod arm;
pub mod bucket;
pub mod command;
pub mod config;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod euler;
pub mod gesture;
pub mod listener;
pub mod quaternion;
pub mod render;
pub mod resolver;
pub mod shared;

pub use arm::{Arm, ArmState};
pub use bucket::{AngleBucket, Axis, Buckets, Resolution};
pub use command::{Lateral, Longitudinal, MovementCommand};
pub use config::{OpenRange, SteeringConfig, SteeringZones};
pub use decoder::OrientationDecoder;
pub use engine::{EngineSnapshot, SteeringEngine};
pub use error::ConfigError;
pub use euler::EulerAngles;
pub use gesture::{Gesture, UnlockRequest};
pub use listener::SensorListener;
pub use quaternion::Quaternion;
pub use resolver::CommandResolver;
