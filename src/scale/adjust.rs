use super::{Bracket, ScaleConfig, util};
use num_traits::Float;

/// A slider position adjusted onto the nearest round-number bracket.
///
/// `exact` is the clamped raw rank for the queried ratio; `low` and `high`
/// are the bracket boundaries enclosing it, coarsened to multiples of 100
/// below rank 1000. The three ratio fields give the normalized positions
/// of the previous boundary, `low`, and `high`, ready for snapping a
/// slider handle or sizing a highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjusted<D, N> {
    /// The bracket boundary at or below `exact`.
    pub low: D,
    /// The clamped raw rank the queried ratio maps to.
    pub exact: D,
    /// The bracket boundary above `exact`.
    pub high: D,
    /// Normalized position of the boundary below `low`.
    pub ratio_at_drop: N,
    /// Normalized position of `low`.
    pub ratio_at_low: N,
    /// Normalized position of `high`.
    pub ratio_at_high: N,
}

impl<D, N> ScaleConfig<D, N>
where
    D: Float,
    N: Float,
{
    /// Adjusts a normalized ratio onto its enclosing round-number bracket.
    ///
    /// The ratio is converted to a raw rank (clamped to the ceiling), the
    /// rank's bracket is resolved, and below rank 1000 the boundaries are
    /// coarsened to multiples of 100: steps of 2, 5 and 10 are too dense
    /// there to be meaningful as frequency bands. The returned boundaries
    /// are then mapped back to ratio space.
    ///
    /// Returns `None` if a numeric conversion between `N` and `D` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spenn::ScaleConfig;
    ///
    /// let config = ScaleConfig::<f64>::new();
    ///
    /// let adjusted = config.adjusted(0.5);
    /// assert_eq!(adjusted.exact, 3162.0);
    /// assert_eq!(adjusted.low, 3000.0);
    /// assert_eq!(adjusted.high, 3500.0);
    ///
    /// // The bottom of the slider coarsens to whole hundreds.
    /// let adjusted = config.adjusted(0.0);
    /// assert_eq!(adjusted.exact, 100.0);
    /// assert_eq!(adjusted.low, 100.0);
    /// assert_eq!(adjusted.high, 200.0);
    /// ```
    pub fn adjusted_opt(&self, ratio: N) -> Option<Adjusted<D, N>> {
        let hundred = util::hundred::<D>();
        let thousand = util::thousand::<D>();

        let exact = self.denormalize_opt(ratio)?;

        let Bracket {
            mut drop_low,
            mut low,
            mut high,
            ..
        } = Bracket::resolve(exact);

        if low < thousand {
            drop_low = ((drop_low / hundred).floor() * hundred).max(hundred);
            low = (low / hundred).floor() * hundred;
            high = (high / hundred).ceil() * hundred;
        }

        Some(Adjusted {
            low,
            exact,
            high,
            ratio_at_drop: self.normalize_opt(&drop_low)?,
            ratio_at_low: self.normalize_opt(&low)?,
            ratio_at_high: self.normalize_opt(&high)?,
        })
    }

    /// Panicking variant of [`ScaleConfig::adjusted_opt`].
    pub fn adjusted(&self, ratio: N) -> Adjusted<D, N> {
        self.adjusted_opt(ratio).unwrap()
    }

    /// Converts an ordered pair of ranks to their normalized ratios.
    ///
    /// No bracket snapping: this is the literal inverse of the exponential
    /// step in [`ScaleConfig::denormalize_opt`].
    pub fn ratios_from_values_opt(&self, values: [D; 2]) -> Option<[N; 2]> {
        Some([
            self.normalize_opt(&values[0])?,
            self.normalize_opt(&values[1])?,
        ])
    }

    /// Panicking variant of [`ScaleConfig::ratios_from_values_opt`].
    pub fn ratios_from_values(&self, values: [D; 2]) -> [N; 2] {
        self.ratios_from_values_opt(values).unwrap()
    }

    /// Converts an ordered pair of ratios to displayable rank values.
    ///
    /// Each ratio maps to the `low` boundary of its adjusted bracket:
    /// values are always snapped *down*, never to the nearest boundary, so
    /// the displayed pair is guaranteed to be made of canonical stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spenn::ScaleConfig;
    ///
    /// let config = ScaleConfig::<f64>::new();
    ///
    /// // Canonical stops survive the round trip unchanged.
    /// let ratios = config.ratios_from_values([1000.0, 5000.0]);
    /// assert_eq!(config.values_from_ratios(ratios), [1000.0, 5000.0]);
    /// ```
    pub fn values_from_ratios_opt(&self, ratios: [N; 2]) -> Option<[D; 2]> {
        Some([
            self.adjusted_opt(ratios[0])?.low,
            self.adjusted_opt(ratios[1])?.low,
        ])
    }

    /// Panicking variant of [`ScaleConfig::values_from_ratios_opt`].
    pub fn values_from_ratios(&self, ratios: [N; 2]) -> [D; 2] {
        self.values_from_ratios_opt(ratios).unwrap()
    }
}
