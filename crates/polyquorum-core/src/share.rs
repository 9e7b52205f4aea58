//! Resolved share points.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A single resolved share: one sample point on the hidden polynomial.
///
/// `x` identifies the participant and comes from a document key, so a
/// machine word is plenty; `y` is the polynomial's value at `x` and is
/// unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Participant index (the abscissa).
    pub x: i64,
    /// Polynomial value at `x`.
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: BigInt) -> Self {
        Self { x, y }
    }
}
