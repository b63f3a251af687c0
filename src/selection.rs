//! Shared state for a two-handled range slider.
//!
//! [`RangeSelection`] owns the pair of currently-selected rank values
//! together with the normalized ratio pair driving the handles, keeping
//! the two representations synchronized through a [`crate::ScaleConfig`].

use crate::scale::ScaleConfig;
use num_traits::Float;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Which end of the range a slider interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The lower handle.
    Lower,
    /// The upper handle; its ratio is clamped to the ceiling's position.
    Upper,
}

/// Failure to parse a `"<low> - <high>"` range string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRangeError {
    /// The string contains no `-` separator.
    #[error("expected a range formatted like \"1000 - 5000\", got {0:?}")]
    MissingSeparator(String),
    /// One side of the separator is not a number.
    #[error("invalid number {0:?} in range")]
    InvalidNumber(String),
}

/// Parses a `"<low> - <high>"` range string into a pair of rank values.
///
/// Whitespace around the separator and the numbers is ignored.
///
/// # Examples
///
/// ```rust
/// use spenn::selection::{ParseRangeError, parse_values};
///
/// assert_eq!(parse_values::<f64>("1000 - 5000"), Ok([1000.0, 5000.0]));
/// assert_eq!(parse_values::<f64>("100-250"), Ok([100.0, 250.0]));
///
/// assert!(matches!(
///     parse_values::<f64>("1000"),
///     Err(ParseRangeError::MissingSeparator(_))
/// ));
/// ```
pub fn parse_values<D>(text: &str) -> Result<[D; 2], ParseRangeError>
where
    D: Float + FromStr,
{
    let (left, right) = text
        .split_once('-')
        .ok_or_else(|| ParseRangeError::MissingSeparator(text.to_owned()))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<D>()
            .map_err(|_| ParseRangeError::InvalidNumber(part.trim().to_owned()))
    };

    Ok([parse(left)?, parse(right)?])
}

/// The selected range of a two-handled logarithmic slider.
///
/// Holds the value pair shown to the user and the ratio pair positioning
/// the handles. Moving a handle ([`RangeSelection::set_end`]) re-derives
/// both displayed values from the ratios, snapping each down to its
/// bracket's low boundary; replacing the values
/// ([`RangeSelection::set_values`]) re-derives the ratios.
///
/// # Examples
///
/// ```rust
/// use spenn::{RangeSelection, ScaleConfig, Side};
///
/// let config = ScaleConfig::<f64>::new().with_ceiling(69_999.0);
/// let mut selection = RangeSelection::new(config, [1000.0, 5000.0]);
///
/// assert_eq!(selection.display(), "1000 - 5000");
///
/// // Dragging the upper handle to 75% of the slider snaps the upper
/// // value onto a canonical stop.
/// selection.set_end(0.75, Side::Upper);
/// assert_eq!(selection.values(), [1000.0, 14_000.0]);
///
/// // Dragging it past the top clamps to the configured ceiling.
/// selection.set_end(1.4, Side::Upper);
/// assert_eq!(selection.values()[1], 70_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelection<D, N = f64>
where
    D: Float,
    N: Float,
{
    config: ScaleConfig<D, N>,
    values: [D; 2],
    ends: [N; 2],
}

impl<D, N> RangeSelection<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a selection over `values`, deriving the handle ratios.
    ///
    /// The values are stored verbatim; they are only snapped to canonical
    /// stops once a handle moves.
    pub fn new(config: ScaleConfig<D, N>, values: [D; 2]) -> Self {
        let ends = config.ratios_from_values(values);
        Self {
            config,
            values,
            ends,
        }
    }

    /// The current value pair.
    pub fn values(&self) -> [D; 2] {
        self.values
    }

    /// The current handle ratio pair.
    pub fn ends(&self) -> [N; 2] {
        self.ends
    }

    /// The scale configuration this selection was built over.
    pub fn config(&self) -> &ScaleConfig<D, N> {
        &self.config
    }

    /// Moves one handle to `ratio` and re-derives both displayed values.
    ///
    /// The upper handle is clamped to [`ScaleConfig::max_ratio`]; the
    /// lower handle takes the ratio verbatim. Values are snapped down to
    /// their bracket's low boundary.
    pub fn set_end(&mut self, ratio: N, side: Side) {
        match side {
            Side::Lower => self.ends[0] = ratio,
            Side::Upper => self.ends[1] = ratio.min(self.config.max_ratio()),
        }
        self.values = self.config.values_from_ratios(self.ends);
    }

    /// Replaces the value pair and re-derives the handle ratios.
    pub fn set_values(&mut self, values: [D; 2]) {
        self.values = values;
        self.ends = self.config.ratios_from_values(values);
    }

    /// Replaces the value pair from a `"<low> - <high>"` string.
    pub fn set_values_str(&mut self, text: &str) -> Result<(), ParseRangeError>
    where
        D: FromStr,
    {
        self.set_values(parse_values(text)?);
        Ok(())
    }

    /// Renders the value pair as `"<low> - <high>"`.
    pub fn display(&self) -> String
    where
        D: Display,
    {
        format!("{} - {}", self.values[0], self.values[1])
    }
}
