use fastnum::decimal::D128;
use spenn::{Bracket, RangeSelection, ScaleConfig, Side};

#[test]
fn test_bracket_resolution_with_decimal() {
    // Resolve a bracket with D128 (Decimal 128-bit) domain values
    let bracket = Bracket::resolve(D128::from(3162));

    assert_eq!(bracket.drop_low, D128::from(2500));
    assert_eq!(bracket.low, D128::from(3000));
    assert_eq!(bracket.high, D128::from(3500));
    assert_eq!(bracket.next_high, D128::from(4000));
}

#[test]
fn test_scale_config_with_decimal_domain_and_ratio() {
    let config = ScaleConfig::<D128, D128>::new();

    assert_eq!(config.ceiling(), D128::from(90_000));
    assert_eq!(config.span(), D128::from(100_000));

    // Rank 1000 is one third of the way up the default scale
    let ratio = config.normalize(&D128::from(1000));
    let third = D128::from(1) / D128::from(3);
    assert!((ratio - third).abs() < D128::from(1e-9));

    // The midpoint lands on rank 3162 and a full ratio clamps to the ceiling
    assert!((config.denormalize(D128::from(0.5)) - D128::from(3162)).abs() < D128::from(1e-9));
    assert!((config.denormalize(D128::from(1)) - D128::from(90_000)).abs() < D128::from(1e-9));
}

#[test]
fn test_scale_config_with_decimal_domain_f32_ratio() {
    // D128 domain, f32 ratios
    let config = ScaleConfig::<D128, f32>::new();

    let ratio: f32 = config.normalize(&D128::from(1000));
    assert!((ratio - 1.0 / 3.0).abs() < 1e-6);

    let value = config.denormalize(0.5f32);
    assert!((value - D128::from(3162)).abs() < D128::from(1e-6));
}

#[test]
fn test_adjusted_with_decimal() {
    let config = ScaleConfig::<D128, D128>::new();

    let adjusted = config.adjusted(D128::from(0.5));
    assert!((adjusted.exact - D128::from(3162)).abs() < D128::from(1e-9));
    assert!((adjusted.low - D128::from(3000)).abs() < D128::from(1e-9));
    assert!((adjusted.high - D128::from(3500)).abs() < D128::from(1e-9));

    // Sub-1000 brackets coarsen to whole hundreds
    let adjusted = config.adjusted(D128::from(0));
    assert!((adjusted.low - D128::from(100)).abs() < D128::from(1e-9));
    assert!((adjusted.high - D128::from(200)).abs() < D128::from(1e-9));
}

#[test]
fn test_reconfigured_ceiling_with_decimal() {
    let config = ScaleConfig::<D128, D128>::new().with_ceiling(D128::from(69_999));

    assert_eq!(config.ceiling(), D128::from(70_000));
    assert_eq!(config.span(), D128::from(80_000));
    assert!(config.max_ratio() < D128::from(1));
}

#[test]
fn test_range_selection_with_decimal() {
    let config = ScaleConfig::<D128, D128>::new();
    let mut selection = RangeSelection::new(config, [D128::from(1000), D128::from(5000)]);

    // Drag the upper handle past the top: it clamps to the ceiling's stop
    selection.set_end(D128::from(2), Side::Upper);
    assert!((selection.values()[1] - D128::from(90_000)).abs() < D128::from(1e-9));
}
