//! Logarithmic range-slider scale mapping with round-number snapping.
//!
//! `spenn` provides the mathematics behind a slider that selects a
//! sub-range of word-frequency ranks (100 up to a configurable ceiling,
//! at most 100000). Slider positions are distributed logarithmically, so
//! the heavily-used low ranks get as much travel as the sparse tail, while
//! the values reported to the user are snapped to human-meaningful round
//! numbers: steps of 2, 5 or 10 per decade, coarsened to whole hundreds
//! below rank 1000.
//!
//! # Core Concepts
//!
//! ## Scale configuration
//!
//! [`ScaleConfig`] holds the ceiling, the derived span and the logarithmic
//! base, and converts bidirectionally between normalized ratios in
//! `[0, 1]` and rank values. It is an immutable value: reconfiguring the
//! ceiling produces a new configuration.
//!
//! ## Brackets
//!
//! [`Bracket`] snaps any raw value to the enclosing round-number interval
//! at the right order of magnitude, and exposes one extra boundary on each
//! side. [`ScaleConfig::adjusted`] composes the two: ratio in, clamped
//! exact value plus snapped bracket (as values and as ratios) out.
//!
//! ## Selection
//!
//! [`RangeSelection`] owns the value pair and ratio pair of a two-handled
//! slider and keeps them synchronized as handles move.
//!
//! # Examples
//!
//! ## Ratio to snapped value and back
//!
//! ```rust
//! use spenn::ScaleConfig;
//!
//! let config = ScaleConfig::<f64>::new();
//!
//! // The middle of the slider lands on rank 3162, inside the
//! // [3000, 3500] bracket.
//! let adjusted = config.adjusted(0.5);
//! assert_eq!(adjusted.exact, 3162.0);
//! assert_eq!(adjusted.low, 3000.0);
//! assert_eq!(adjusted.high, 3500.0);
//!
//! // Displayed values always snap down to the bracket's low boundary,
//! // so canonical stops round-trip exactly.
//! let ratios = config.ratios_from_values([1000.0, 5000.0]);
//! assert_eq!(config.values_from_ratios(ratios), [1000.0, 5000.0]);
//! ```
//!
//! ## Configuring the ceiling
//!
//! ```rust
//! use spenn::ScaleConfig;
//!
//! // A corpus with 69999 usable ranks: the ceiling rounds up to the stop
//! // above, and tops out short of the slider's end.
//! let config = ScaleConfig::<f64>::new().with_ceiling(69_999.0);
//! assert_eq!(config.ceiling(), 70_000.0);
//! assert!(config.max_ratio() < 1.0);
//! ```
//!
//! ## Driving a two-handled slider
//!
//! ```rust
//! use spenn::{RangeSelection, ScaleConfig, Side};
//!
//! let config = ScaleConfig::<f64>::new();
//! let mut selection = RangeSelection::new(config, [1000.0, 5000.0]);
//!
//! // A drag reports a new normalized position for one handle; the
//! // displayed pair snaps onto canonical stops.
//! selection.set_end(0.5, Side::Upper);
//! assert_eq!(selection.display(), "1000 - 3000");
//! ```

pub mod scale;
pub mod selection;

pub use num_traits::Float;
pub use scale::{Adjusted, Bracket, ScaleConfig, Stop, StopIter};
pub use selection::{ParseRangeError, RangeSelection, Side};
