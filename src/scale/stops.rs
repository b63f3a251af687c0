use super::{ScaleConfig, util};
use num_traits::Float;

/// A single canonical stop on the slider scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop<D> {
    /// The rank value of this stop.
    pub value: D,
    /// 0 for powers of ten, 1 for intermediate stops.
    pub level: u8,
}

/// Walks the ladder of canonical stops from 100 up to the ceiling.
///
/// For the default configuration this is `100, 200, ..., 1000, 1200, ...,
/// 2000, 2500, ..., 5000, 6000, ..., 10000, 12000, ..., 20000, 25000, ...,
/// 50000, 60000, ..., 90000`: exactly the values that
/// [`ScaleConfig::values_from_ratios`] can ever report.
///
/// The iterator probes each bracket's upper boundary to find the next one.
/// Brackets whose `low` does not advance (which happens at exact powers of
/// ten, where the first bracket above e.g. 1000 is the narrow `[1000,
/// 1100]`) are skipped rather than emitted twice.
pub struct StopIter<D, N>
where
    D: Float,
    N: Float,
{
    config: ScaleConfig<D, N>,
    probe: Option<N>,
    last: Option<D>,
    remaining: usize,
}

const MAX_STOPS: usize = 1000;

impl<D, N> StopIter<D, N>
where
    D: Float,
    N: Float,
{
    pub(crate) fn new(config: &ScaleConfig<D, N>) -> Self {
        Self {
            config: *config,
            probe: Some(N::zero()),
            last: None,
            remaining: MAX_STOPS,
        }
    }
}

impl<D, N> Iterator for StopIter<D, N>
where
    D: Float,
    N: Float,
{
    type Item = Stop<D>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;

            let probe = self.probe?;
            let adjusted = self.config.adjusted_opt(probe)?;

            if adjusted.low >= self.config.ceiling() {
                self.probe = None;
            } else {
                self.probe = Some(adjusted.ratio_at_high);
            }

            let advanced = self.last.is_none_or(|last| adjusted.low > last);
            if advanced {
                self.last = Some(adjusted.low);
                return Some(Stop {
                    value: adjusted.low,
                    level: level_of(adjusted.low),
                });
            }
        }

        None
    }
}

/// Reduce to a single leading digit; exactly 1 means a power of ten.
fn level_of<D: Float>(value: D) -> u8 {
    let ten = util::ten::<D>();
    let mut reduced = value;
    let mut guard = 0;
    while reduced >= ten && guard < 64 {
        reduced = reduced / ten;
        guard += 1;
    }

    u8::from(reduced != D::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_endpoints() {
        let config = ScaleConfig::<f64>::new();
        let stops: Vec<Stop<f64>> = config.stops().collect();

        assert_eq!(stops.first().map(|s| s.value), Some(100.0));
        assert_eq!(stops.last().map(|s| s.value), Some(90_000.0));
    }

    #[test]
    fn test_default_ladder_values() {
        let config = ScaleConfig::<f64>::new();
        let values: Vec<f64> = config.stops().map(|s| s.value).collect();

        // 100..1000 by 100, 1200..2000 by 200, 2500..5000 by 500,
        // 6000..10000 by 1000, 12000..20000 by 2000, 25000..50000 by 5000,
        // 60000..90000 by 10000.
        assert_eq!(values.len(), 41);

        for expected in [
            300.0, 1000.0, 1200.0, 2000.0, 2500.0, 5000.0, 6000.0, 10_000.0, 12_000.0, 20_000.0,
            25_000.0, 50_000.0, 60_000.0,
        ] {
            assert!(values.contains(&expected), "missing stop {expected}");
        }
        // No fine-grained sub-1000 stops, and no 1100 after the 1000 mark.
        assert!(!values.contains(&250.0));
        assert!(!values.contains(&1100.0));
    }

    #[test]
    fn test_ladder_strictly_increasing() {
        let config = ScaleConfig::<f64>::new();
        let values: Vec<f64> = config.stops().map(|s| s.value).collect();

        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "ladder not increasing at {pair:?}");
        }
    }

    #[test]
    fn test_levels_mark_powers_of_ten() {
        let config = ScaleConfig::<f64>::new();

        for stop in config.stops() {
            let expected = if [100.0, 1000.0, 10_000.0].contains(&stop.value) {
                0
            } else {
                1
            };
            assert_eq!(stop.level, expected, "wrong level at {}", stop.value);
        }
    }

    #[test]
    fn test_ladder_respects_lowered_ceiling() {
        let config = ScaleConfig::<f64>::new().with_ceiling(69_999.0);
        let values: Vec<f64> = config.stops().map(|s| s.value).collect();

        assert_eq!(values.last(), Some(&70_000.0));
        assert!(!values.contains(&80_000.0));
    }
}
