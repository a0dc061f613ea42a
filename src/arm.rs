//! Arm sync and lock state
//!
//! The armband only reports poses reliably once it has synced to an arm, and
//! only while unlocked. Hosts use this as the gate for acting on commands.

use core::fmt::{Display, Formatter};

/// Which arm the band is worn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    pub const fn letter(self) -> char {
        match self {
            Arm::Left => 'L',
            Arm::Right => 'R',
        }
    }
}

impl Display for Arm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Arm::Left => f.write_str("left"),
            Arm::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmState {
    /// `Some` while synced to an arm.
    pub synced: Option<Arm>,
    pub unlocked: bool,
}

impl ArmState {
    pub const DETACHED: Self = Self {
        synced: None,
        unlocked: false,
    };

    pub const fn is_on_arm(&self) -> bool {
        self.synced.is_some()
    }
}
