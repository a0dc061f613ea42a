use core::fmt::{Display, Formatter};

/// Rejected configuration value.
///
/// The decoding and resolving paths themselves never fail; out-of-range input
/// there is clamped. Only building a configuration can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ConfigError {
    /// Fewer buckets than [`crate::bucket::Resolution::MIN`].
    InvalidResolution(u8),
    /// An open bucket interval `(lo, hi)` that is empty or reaches past the
    /// resolution.
    InvalidZone { lo: u8, hi: u8 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidResolution(n) => write!(f, "invalid resolution: {} buckets", n),
            Self::InvalidZone { lo, hi } => write!(f, "invalid steering zone ({}, {})", lo, hi),
        }
    }
}
