//! Logging macros
//!
//! - `defmt-03` feature: forwards to `defmt`
//! - `log` feature (without `defmt-03`): forwards to the `log` facade
//! - neither: compiles to nothing, arguments are still type-checked
//!
//! Arguments must implement `defmt::Format` and `core::fmt::Display` so the
//! same call site works under both backends.
#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::trace!($s $(, $x)*);
            #[cfg(not(any(feature = "defmt-03", feature = "log")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::debug!($s $(, $x)*);
            #[cfg(not(any(feature = "defmt-03", feature = "log")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::info!($s $(, $x)*);
            #[cfg(not(any(feature = "defmt-03", feature = "log")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::warn!($s $(, $x)*);
            #[cfg(not(any(feature = "defmt-03", feature = "log")))]
            let _ = ($( & $x ),*);
        }
    };
}
