use num_traits::Float;

/// Build 10 from `D::one()` by addition, avoiding a fallible `D::from`
/// conversion in generic code.
pub(crate) fn ten<D: Float>() -> D {
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    five + five
}

/// Build 100, the fixed floor of the addressable rank range.
pub(crate) fn hundred<D: Float>() -> D {
    ten::<D>() * ten::<D>()
}

/// Build 1000, the threshold below which brackets coarsen to multiples of 100.
pub(crate) fn thousand<D: Float>() -> D {
    hundred::<D>() * ten::<D>()
}
