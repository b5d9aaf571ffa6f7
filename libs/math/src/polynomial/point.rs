//! Point

use num_bigint::BigInt;

/// A point `(x, y)` on a polynomial over a prime field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new<X, Y>(x: X, y: Y) -> Point
    where
        X: Into<BigInt>,
        Y: Into<BigInt>,
    {
        Point { x: x.into(), y: y.into() }
    }
}
