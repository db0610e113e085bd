//! Logging utilities.

pub mod formatter;

#[cfg(all(
    feature = "logging",
    any(feature = "log", feature = "defmt", feature = "tracing")
))]
pub(crate) use formatter::Formatter;

#[macro_export]
#[doc(hidden)]
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "logging", feature = "tracing"))]
        tracing::trace!($($arg)*);

        #[cfg(all(feature = "logging", feature = "log"))]
        log::trace!($($arg)*);

        #[cfg(all(feature = "logging", feature = "defmt"))]
        defmt::trace!($($arg)*);
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "logging", feature = "tracing"))]
        tracing::debug!($($arg)*);

        #[cfg(all(feature = "logging", feature = "log"))]
        log::debug!($($arg)*);

        #[cfg(all(feature = "logging", feature = "defmt"))]
        defmt::debug!($($arg)*);
    };
}

#[allow(unused_imports)]
pub(crate) use crate::{debug, trace};
