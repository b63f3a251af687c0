//! Logarithmic scale mapping and round-number bracket resolution.
//!
//! This module contains the mathematical core of the crate:
//!
//! - [`ScaleConfig`] holds the scale parameters (ceiling, span, log span)
//!   and converts between normalized ratios and domain values.
//! - [`Bracket`] snaps any raw value to the enclosing "nice" round-number
//!   interval at the appropriate order of magnitude.
//! - [`Adjusted`] is the composed result: a clamped exact value, its
//!   (possibly coarsened) bracket boundaries, and the ratios of those
//!   boundaries.
//! - [`StopIter`] walks the ladder of canonical bracket boundaries from
//!   the floor of the range up to the configured ceiling.
//!
//! All types are generic over a domain type `D` and a ratio type `N`,
//! both bounded by [`num_traits::Float`].

mod adjust;
mod bracket;
mod config;
mod stops;
pub(crate) mod util;

pub use adjust::Adjusted;
pub use bracket::Bracket;
pub use config::ScaleConfig;
pub use stops::{Stop, StopIter};
