//! Point Sequence.

use crate::{errors::InterpolationError, fields::PrimeField, polynomial::point::Point};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Point sequence.
#[derive(Clone, Debug, Default)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Lagrange interpolation for Point Sequence at Zero.
    ///
    /// For every point `i` the basis polynomial evaluated at zero is `Π (-x_j) / Π (x_i - x_j)` over
    /// all other points `j`. Any number of points is accepted: fewer points than the degree of the
    /// original polynomial plus one still interpolate, just to a different polynomial.
    pub fn lagrange_interpolate(&self, field: &PrimeField) -> Result<BigInt, InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }

        let mut res = BigInt::zero();

        for (i, pi) in self.points.iter().enumerate() {
            let mut num = BigInt::one();
            let mut den = BigInt::one();
            for (j, pj) in self.points.iter().enumerate() {
                if j != i {
                    num = field.mul(&num, &field.neg(&pj.x));
                    den = field.mul(&den, &field.sub(&pi.x, &pj.x));
                }
            }
            let term = field.mul(&field.element(&pi.y), &field.div(&num, &den)?);
            res = field.add(&res, &term);
        }
        Ok(res)
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
