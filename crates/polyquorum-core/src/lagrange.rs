//! Integer-exact Lagrange interpolation at x = 0.
//!
//! Works over the unbounded integers rather than a finite field, so a
//! Lagrange basis division is only meaningful when it is exact. A non-exact
//! division is reported as [`InterpolationError::NonIntegerResult`] — that
//! failure is how inconsistent (bad) shares reveal themselves to the
//! consensus layer, not a numeric bug.

use crate::share::Share;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use thiserror::Error;

/// Per-subset interpolation failures.
///
/// Both variants are routine during consensus voting: the engine discards
/// the offending subset and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Two points share an x-coordinate; the basis denominator is zero.
    #[error("Duplicate x-coordinate {0}: interpolation is undefined")]
    DuplicateAbscissa(i64),
    /// A Lagrange term is not evenly divisible: the points do not lie on
    /// a common integer-coefficient polynomial of this degree.
    #[error("Lagrange term is not an exact integer")]
    NonIntegerResult,
}

/// Evaluate the unique degree-(k-1) polynomial through `points` at x = 0.
///
/// The degree is implied by `points.len()`; the caller chooses how many
/// points to pass. Each Lagrange basis coefficient at zero is
/// `product(-x_m) / product(x_j - x_m)` over `m != j`, and every division
/// must come out exact.
pub fn interpolate_at_zero(points: &[Share]) -> Result<BigInt, InterpolationError> {
    let mut secret = BigInt::zero();

    for (j, pj) in points.iter().enumerate() {
        let mut numerator = BigInt::from(1);
        let mut denominator = BigInt::from(1);

        for (m, pm) in points.iter().enumerate() {
            if m != j {
                if pj.x == pm.x {
                    return Err(InterpolationError::DuplicateAbscissa(pj.x));
                }
                numerator *= -BigInt::from(pm.x);
                denominator *= BigInt::from(pj.x) - BigInt::from(pm.x);
            }
        }

        // Exactness check before the truncating division is trusted.
        let (basis, remainder) = numerator.div_rem(&denominator);
        if !remainder.is_zero() {
            return Err(InterpolationError::NonIntegerResult);
        }

        secret += &pj.y * basis;
    }

    Ok(secret)
}
