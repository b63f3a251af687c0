use super::util;
use num_traits::Float;

/// A round-number interval enclosing a raw value, plus its neighbors.
///
/// Human-meaningful slider stops are multiples of 2, 5 or 10 at the value's
/// order of magnitude: `..., 18, 20, 25, 30, ..., 45, 50, 60, ..., 90, 100`.
/// `Bracket` locates the stop immediately at or below a raw value (`low`),
/// the stop above it (`high`), and one extra stop on each side (`drop_low`,
/// `next_high`) for display and reconfiguration purposes.
///
/// Brackets are computed fresh on every call and never cached. They are
/// guaranteed non-degenerate: `high > low` always, even for inputs that
/// land exactly on a stop.
///
/// # Examples
///
/// ```rust
/// use spenn::Bracket;
///
/// // 3162 lies between the stops 3000 and 3500.
/// let bracket = Bracket::resolve(3162.0_f64);
/// assert_eq!(bracket.drop_low, 2500.0);
/// assert_eq!(bracket.low, 3000.0);
/// assert_eq!(bracket.high, 3500.0);
/// assert_eq!(bracket.next_high, 4000.0);
///
/// // A value exactly on a stop widens upward instead of collapsing.
/// let bracket = Bracket::resolve(2000.0_f64);
/// assert_eq!(bracket.low, 2000.0);
/// assert_eq!(bracket.high, 2500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<D> {
    /// Start of the stop interval below `low`.
    pub drop_low: D,
    /// The stop at or immediately below the input.
    pub low: D,
    /// The stop strictly above the input (or above `low` for on-stop inputs).
    pub high: D,
    /// End of the stop interval above `high`.
    pub next_high: D,
}

/// Step size for a reduced value strictly inside a decade.
///
/// Stops are densest below 20 (step 2), medium up to 50 (step 5), and
/// coarsest above (step 10).
fn step_for<D: Float>(value: D) -> D {
    let ten = util::ten::<D>();
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    let twenty = ten + ten;
    let fifty = five * ten;

    if value < twenty {
        two
    } else if value < fifty {
        five
    } else {
        ten
    }
}

/// Step size for the stop below `low`.
///
/// Thresholds are inclusive here (`<= 20`, `<= 50`), unlike [`step_for`]:
/// a `low` of exactly 20 steps down by 2 (to 18), not by 5. This keeps the
/// downward neighbor of each threshold stop on the finer grid.
fn step_below<D: Float>(low: D) -> D {
    let ten = util::ten::<D>();
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    let twenty = ten + ten;
    let fifty = five * ten;

    if low <= twenty {
        two
    } else if low <= fifty {
        five
    } else {
        ten
    }
}

impl<D: Float> Bracket<D> {
    /// Resolves the bracket enclosing `input`.
    ///
    /// The input is repeatedly divided by 10 until it is at most 100,
    /// isolating its two leading significant digits; the bracket is found
    /// on that reduced scale and multiplied back up. Inputs are expected to
    /// be positive, typically within the addressable rank range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spenn::Bracket;
    ///
    /// let bracket = Bracket::resolve(45.0_f64);
    /// assert_eq!(bracket.low, 45.0);
    /// assert_eq!(bracket.high, 50.0);
    /// assert_eq!(bracket.drop_low, 40.0);
    /// assert_eq!(bracket.next_high, 60.0);
    /// ```
    pub fn resolve(input: D) -> Self {
        let ten = util::ten::<D>();
        let hundred = util::hundred::<D>();

        let mut reduced = input;
        let mut magnitude = D::one();
        while reduced > hundred {
            reduced = reduced / ten;
            magnitude = magnitude * ten;
        }

        let step = step_for(reduced);
        let mut low = (reduced / step).floor() * step;
        let mut high = (reduced / step).ceil() * step;
        if high == low {
            // Input sits exactly on a stop; a bracket must never be degenerate.
            high = high + step;
        }

        let drop_low = (low - step_below(low)) * magnitude;
        let next_high = (high + step_for(high)) * magnitude;

        low = low * magnitude;
        high = high * magnitude;

        Self {
            drop_low,
            low,
            high,
            next_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mid_interval() {
        let bracket = Bracket::resolve(3162.0_f64);

        assert_eq!(bracket.drop_low, 2500.0);
        assert_eq!(bracket.low, 3000.0);
        assert_eq!(bracket.high, 3500.0);
        assert_eq!(bracket.next_high, 4000.0);
    }

    #[test]
    fn test_resolve_no_reduction_needed() {
        // 45 is already at most 100: magnitude stays 1.
        let bracket = Bracket::resolve(45.0_f64);

        assert_eq!(bracket.drop_low, 40.0);
        assert_eq!(bracket.low, 45.0);
        assert_eq!(bracket.high, 50.0);
        assert_eq!(bracket.next_high, 60.0);
    }

    #[test]
    fn test_resolve_on_stop_widens_upward() {
        // 2000 reduces to 20, which is exactly on a stop; the bracket must
        // widen to [2000, 2500] rather than collapse.
        let bracket = Bracket::resolve(2000.0_f64);

        assert_eq!(bracket.low, 2000.0);
        assert_eq!(bracket.high, 2500.0);
        assert_eq!(bracket.next_high, 3000.0);
    }

    #[test]
    fn test_resolve_threshold_asymmetry() {
        // At a low of exactly 20 the downward step is 2 (inclusive
        // threshold), while the upward step from 25 is 5.
        let bracket = Bracket::resolve(20.0_f64);
        assert_eq!(bracket.drop_low, 18.0);
        assert_eq!(bracket.low, 20.0);
        assert_eq!(bracket.high, 25.0);
        assert_eq!(bracket.next_high, 30.0);

        // Same at 50: down by 5, up by 10.
        let bracket = Bracket::resolve(50.0_f64);
        assert_eq!(bracket.drop_low, 45.0);
        assert_eq!(bracket.low, 50.0);
        assert_eq!(bracket.high, 60.0);
        assert_eq!(bracket.next_high, 70.0);
    }

    #[test]
    fn test_resolve_powers_of_ten_not_degenerate() {
        for input in [100.0_f64, 1000.0, 10_000.0, 100_000.0] {
            let bracket = Bracket::resolve(input);
            assert!(
                bracket.high > bracket.low,
                "degenerate bracket at {input}: [{}, {}]",
                bracket.low,
                bracket.high
            );
            assert_eq!(bracket.low, input);
        }
    }

    #[test]
    fn test_resolve_exact_power_of_ten() {
        // 1000 reduces to 100 (one division), not 10: the loop only runs
        // while the value exceeds 100.
        let bracket = Bracket::resolve(1000.0_f64);

        assert_eq!(bracket.drop_low, 900.0);
        assert_eq!(bracket.low, 1000.0);
        assert_eq!(bracket.high, 1100.0);
        assert_eq!(bracket.next_high, 1200.0);
    }

    #[test]
    fn test_resolve_containment_sweep() {
        let mut input = 100.0_f64;
        while input < 100_000.0 {
            let bracket = Bracket::resolve(input);

            assert!(
                bracket.drop_low <= bracket.low,
                "drop_low {} > low {} at {input}",
                bracket.drop_low,
                bracket.low
            );
            assert!(
                bracket.low <= input && input <= bracket.high,
                "input {input} outside [{}, {}]",
                bracket.low,
                bracket.high
            );
            assert!(
                bracket.high <= bracket.next_high,
                "high {} > next_high {} at {input}",
                bracket.high,
                bracket.next_high
            );

            input += 97.3;
        }
    }

    #[test]
    fn test_resolve_f32() {
        let bracket = Bracket::resolve(3162.0_f32);

        assert_eq!(bracket.low, 3000.0);
        assert_eq!(bracket.high, 3500.0);
    }
}
