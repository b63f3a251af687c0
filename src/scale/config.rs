use super::{Bracket, StopIter, util};
use num_traits::Float;

/// Logarithmic scale parameters for a word-frequency rank slider.
///
/// A `ScaleConfig` maps normalized slider ratios in `[0, 1]` onto ranks in
/// `[100, ceiling]`. Ratios are distributed logarithmically: equal slider
/// distances represent equal rank *ratios*, so the densely-used low ranks
/// get as much slider travel as the long sparse tail.
///
/// The floor of the range is fixed at 100. The `ceiling` is the largest
/// rank reachable by a ratio of 1.0; the `span` is the ceiling rounded up
/// one further stop and only exists to derive `log_span = log10(span /
/// 100)`. Because `span > ceiling`, the ceiling itself sits at a ratio
/// strictly below 1.0 (see [`ScaleConfig::max_ratio`]).
///
/// `ScaleConfig` is an immutable value type: reconfiguration via
/// [`ScaleConfig::with_ceiling`] returns a new value rather than mutating
/// shared state. Construct it once and pass it to every conversion.
///
/// # Type Parameters
///
/// - `D`: Domain type carrying rank values (typically `f64`)
/// - `N`: Ratio type for normalized `[0, 1]` positions (typically `f64`)
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use spenn::ScaleConfig;
///
/// let config = ScaleConfig::<f64>::new();
///
/// assert_eq!(config.ceiling(), 90_000.0);
/// assert_eq!(config.span(), 100_000.0);
///
/// // log10(100_000 / 100) = 3
/// assert!((config.log_span() - 3.0).abs() < 1e-12);
///
/// // The ceiling sits just short of the top of the slider.
/// let max = config.max_ratio();
/// assert!(max > 0.98 && max < 1.0);
/// ```
///
/// ## Bidirectional mapping
///
/// ```rust
/// use spenn::ScaleConfig;
///
/// let config = ScaleConfig::<f64>::new();
///
/// // Rank 1000 is one third of the way up the default scale.
/// let ratio = config.normalize(&1000.0);
/// assert!((ratio - 1.0 / 3.0).abs() < 1e-12);
///
/// // Halfway along the slider lands on rank 3162 (rounded), and a ratio
/// // of 1.0 clamps to the ceiling.
/// assert_eq!(config.denormalize(0.5), 3162.0);
/// assert_eq!(config.denormalize(1.0), 90_000.0);
/// ```
///
/// ## Reconfiguring the ceiling
///
/// ```rust
/// use spenn::ScaleConfig;
///
/// let config = ScaleConfig::<f64>::new().with_ceiling(69_999.0);
///
/// // The requested ceiling rounds up to the next stop, and the span one
/// // stop further.
/// assert_eq!(config.ceiling(), 70_000.0);
/// assert_eq!(config.span(), 80_000.0);
/// assert!(config.max_ratio() < 1.0);
///
/// // Invalid requests leave the configuration untouched.
/// let same = config.with_ceiling(f64::NAN).with_ceiling(250_000.0);
/// assert_eq!(same, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig<D, N = f64>
where
    D: Float,
    N: Float,
{
    ceiling: D,
    span: D,
    log_span: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> ScaleConfig<D, N>
where
    D: Float,
    N: Float,
{
    /// The fixed floor of the addressable rank range: 100.
    pub fn base() -> D {
        util::hundred::<D>()
    }

    /// Creates the default configuration: ceiling 90000, span 100000.
    pub fn new() -> Self {
        let ten = util::ten::<D>();
        let hundred = util::hundred::<D>();
        let nine = ten - D::one();

        let ceiling = nine * hundred * hundred; // 90_000
        let span = ten * hundred * hundred; // 100_000

        Self {
            ceiling,
            span,
            log_span: (span / hundred).log10(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns a configuration whose ceiling covers `requested`.
    ///
    /// The requested ceiling is rounded up to the stop boundary above it
    /// (so every rank up to the request stays reachable) and the span one
    /// stop further, then `log_span` is recomputed. Requests that are not
    /// positive finite numbers, or that are at least 100000, are rejected
    /// and the current configuration is returned unchanged. Applying the
    /// same request twice yields the same configuration.
    pub fn with_ceiling(&self, requested: D) -> Self {
        let limit = util::ten::<D>() * util::hundred::<D>() * util::hundred::<D>();
        if !requested.is_finite() || requested <= D::zero() || requested >= limit {
            return *self;
        }

        let bracket = Bracket::resolve(requested);
        Self {
            ceiling: bracket.high,
            span: bracket.next_high,
            log_span: (bracket.next_high / Self::base()).log10(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// The largest rank reachable by a ratio of 1.0.
    pub fn ceiling(&self) -> D {
        self.ceiling
    }

    /// The ceiling rounded up one further stop; only used to derive the
    /// logarithmic span.
    pub fn span(&self) -> D {
        self.span
    }

    /// `log10(span / 100)`, the denominator of every ratio conversion.
    pub fn log_span(&self) -> D {
        self.log_span
    }

    /// The normalized position of the ceiling, `normalize(ceiling)`.
    ///
    /// Strictly below 1.0 whenever `span > ceiling`, which holds for every
    /// configuration produced by [`ScaleConfig::with_ceiling`].
    pub fn max_ratio_opt(&self) -> Option<N> {
        self.normalize_opt(&self.ceiling)
    }

    /// Panicking variant of [`ScaleConfig::max_ratio_opt`].
    pub fn max_ratio(&self) -> N {
        self.max_ratio_opt().unwrap()
    }

    /// Converts a rank to its normalized ratio: `log10(value / 100) /
    /// log_span`.
    ///
    /// This is the exact inverse of the exponential step in
    /// [`ScaleConfig::denormalize`]; no bracket snapping is applied.
    /// Returns `None` if the result cannot be represented in `N`.
    pub fn normalize_opt(&self, value: &D) -> Option<N> {
        let ratio = (*value / Self::base()).log10() / self.log_span;
        N::from(ratio)
    }

    /// Panicking variant of [`ScaleConfig::normalize_opt`].
    pub fn normalize(&self, value: &D) -> N {
        self.normalize_opt(value).unwrap()
    }

    /// Converts a normalized ratio to a raw rank:
    /// `min(ceiling, round(10^(ratio * log_span) * 100))`.
    ///
    /// Ratios above the ceiling's position clamp to the ceiling; negative
    /// ratios land at or below 100. Out-of-range input degrades by
    /// clamping, never by failing. Returns `None` if the ratio cannot be
    /// represented in `D`.
    pub fn denormalize_opt(&self, ratio: N) -> Option<D> {
        let ratio_d: D = D::from(ratio)?;
        let scaled = ratio_d * self.log_span;
        let raw = util::ten::<D>().powf(scaled) * Self::base();
        Some(raw.round().min(self.ceiling))
    }

    /// Panicking variant of [`ScaleConfig::denormalize_opt`].
    pub fn denormalize(&self, ratio: N) -> D {
        self.denormalize_opt(ratio).unwrap()
    }

    /// Iterates the canonical stop ladder from 100 up to the ceiling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spenn::ScaleConfig;
    ///
    /// let config = ScaleConfig::<f64>::new();
    /// let stops: Vec<f64> = config.stops().map(|stop| stop.value).collect();
    ///
    /// assert_eq!(stops.first(), Some(&100.0));
    /// assert_eq!(stops.last(), Some(&90_000.0));
    /// assert!(stops.contains(&2500.0));
    /// ```
    pub fn stops(&self) -> StopIter<D, N> {
        StopIter::new(self)
    }
}

impl<D, N> Default for ScaleConfig<D, N>
where
    D: Float,
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}
