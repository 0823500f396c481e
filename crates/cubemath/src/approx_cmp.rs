//! Approximate comparison functions that automatically use [`EPSILON`].

use std::cmp::Ordering;

pub use approx::AbsDiffEq;
use num_traits::Zero;

use crate::{EPSILON, Float};

/// Compares two values, but considers them equal if they are separated by
/// less than `EPSILON`.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Compares two numbers, but considers them equal if they are separated by less
/// than `EPSILON`.
pub fn approx_cmp(a: Float, b: Float) -> Ordering {
    if approx_eq(&a, &b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Compares two slices lexicographically using [`approx_cmp()`] on each
/// element.
pub fn approx_cmp_slices(a: &[Float], b: &[Float]) -> Ordering {
    std::iter::zip(a, b)
        .map(|(&l, &r)| approx_cmp(l, r))
        .find(|&ord| ord != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Returns whether `x` has an absolute value less than `EPSILON`.
pub fn is_approx_zero<T: AbsDiffEq<Epsilon = Float> + Zero>(x: &T) -> bool {
    approx_eq(x, &T::zero())
}

/// Rounds `f` to the nearest integer, rounding halves away from zero.
///
/// Returns `None` if the result does not fit in an `i32`.
pub fn round_to_i32(f: Float) -> Option<i32> {
    let rounded = f.round();
    (rounded >= i32::MIN as Float && rounded <= i32::MAX as Float).then_some(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_cmp() {
        assert_eq!(approx_cmp(1.0, 1.0 + EPSILON / 10.0), Ordering::Equal);
        assert_eq!(approx_cmp(1.0, 1.1), Ordering::Less);
        assert_eq!(approx_cmp(-0.5, -0.6), Ordering::Greater);
    }

    #[test]
    fn test_approx_cmp_slices() {
        assert_eq!(
            approx_cmp_slices(&[0.0, 1.0, 2.0], &[0.0, 1.0 - EPSILON / 2.0, 3.0]),
            Ordering::Less,
        );
        assert_eq!(approx_cmp_slices(&[1.0], &[0.0, 5.0]), Ordering::Greater);
        assert_eq!(approx_cmp_slices(&[1.0, 2.0], &[1.0, 2.0]), Ordering::Equal);
    }

    #[test]
    fn test_round_to_i32() {
        assert_eq!(round_to_i32(2.999_999), Some(3));
        assert_eq!(round_to_i32(-1.5), Some(-2));
        assert_eq!(round_to_i32(1e12), None);
    }
}
