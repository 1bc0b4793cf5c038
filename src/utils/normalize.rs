use crate::math::{UnitVector, Vector, DEFAULT_EPSILON};
use thiserror::Error;

/// Error returned when normalizing a vector with (near-)zero length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVector;

/// Normalizes `v`, failing instead of yielding NaN components when `v` has
/// near-zero length.
#[inline]
pub fn try_normalize(v: Vector) -> Result<UnitVector, DegenerateVector> {
    UnitVector::try_new(v, DEFAULT_EPSILON).ok_or(DegenerateVector)
}

#[cfg(test)]
mod test {
    use super::{try_normalize, DegenerateVector};
    use crate::math::Vector;

    #[test]
    fn zero_vector_is_rejected() {
        assert_eq!(try_normalize(Vector::zeros()), Err(DegenerateVector));
    }

    #[test]
    fn nonzero_vector_is_normalized() {
        let unit = try_normalize(Vector::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(unit.x, 0.6, epsilon = 1.0e-6);
        assert_relative_eq!(unit.y, 0.8, epsilon = 1.0e-6);
    }
}
