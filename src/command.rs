//! Movement commands
//!
//! Steering and drive are independent axes: the arm's heading decides the
//! lateral part, the hand pose decides the longitudinal part. A command is the
//! pair of both.

use core::fmt::{Display, Formatter};

/// Steering axis decision, taken from the yaw bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub enum Lateral {
    TurnRight,
    TurnLeft,
    Straight,
    /// Yaw is in a dead zone; no steering statement.
    Idle,
}

/// Drive axis decision, taken from the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub enum Longitudinal {
    Forward,
    Reverse,
}

/// The full command for one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct MovementCommand {
    pub lateral: Lateral,
    /// `None` when the gesture carries no drive command.
    pub longitudinal: Option<Longitudinal>,
}

impl MovementCommand {
    pub const IDLE: Self = Self {
        lateral: Lateral::Idle,
        longitudinal: None,
    };

    pub const fn new(lateral: Lateral, longitudinal: Option<Longitudinal>) -> Self {
        Self {
            lateral,
            longitudinal,
        }
    }

    /// Neither axis asks for anything.
    pub const fn is_idle(&self) -> bool {
        matches!(self.lateral, Lateral::Idle) && self.longitudinal.is_none()
    }
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::IDLE
    }
}

impl Lateral {
    pub const fn label(self) -> &'static str {
        match self {
            Lateral::TurnRight => "Right",
            Lateral::TurnLeft => "Left",
            Lateral::Straight => "Straight",
            Lateral::Idle => "",
        }
    }
}

impl Longitudinal {
    pub const fn label(self) -> &'static str {
        match self {
            Longitudinal::Forward => "Forward",
            Longitudinal::Reverse => "Reverse",
        }
    }
}

impl Display for MovementCommand {
    /// Flattened label, drive part first: `Forward Right`, `Left`, `Idle`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match (self.longitudinal, self.lateral) {
            (None, Lateral::Idle) => f.write_str("Idle"),
            (None, lateral) => f.write_str(lateral.label()),
            (Some(drive), Lateral::Idle) => f.write_str(drive.label()),
            (Some(drive), lateral) => write!(f, "{} {}", drive.label(), lateral.label()),
        }
    }
}
