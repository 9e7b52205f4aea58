//! Polyquorum Core
//!
//! Reconstruct a secret that was split with a k-of-n polynomial sharing
//! scheme, tolerating shares that were corrupted or maliciously altered.
//!
//! # How it works
//!
//! Every share is a point `(x, y)` on an unknown integer polynomial of
//! degree `k - 1`; the secret is the polynomial's constant term `P(0)`.
//! Since we do not know which shares are genuine, the engine interpolates
//! *every* k-sized subset of the shares and lets the subsets vote: a subset
//! of all-genuine shares always reproduces the true constant term, while a
//! subset containing a bad share either fails the integer-exactness check
//! (and is discarded) or votes for some other value. The most frequent
//! candidate wins.
//!
//! All arithmetic is exact over the unbounded integers ([`num_bigint`]).
//! This is *not* a finite-field implementation and offers no cryptographic
//! secrecy guarantee; a non-exact Lagrange division is the designed signal
//! that a subset contains a bad share.
//!
//! Enumerating all `C(n, k)` subsets is an explicit design choice and the
//! dominant cost; see [`consensus`] for the complexity notes.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use polyquorum_core::{reconstruct_secret, Share};
//!
//! // P(x) = -70x^2 + 160x + 210, threshold 3.
//! // Shares 1-3 are genuine; shares 4 and 5 were tampered with.
//! let shares = vec![
//!     Share::new(1, BigInt::from(300)),
//!     Share::new(2, BigInt::from(250)),
//!     Share::new(3, BigInt::from(60)),
//!     Share::new(4, BigInt::from(30)),
//!     Share::new(5, BigInt::from(6000)),
//! ];
//!
//! let secret = reconstruct_secret(&shares, 3).unwrap();
//! assert_eq!(secret, BigInt::from(210));
//! ```

pub mod consensus;
pub mod lagrange;
pub mod share;

// Re-exports
pub use consensus::{reconstruct_secret, reconstruct_secret_with, Exhaustive, SubsetStrategy};
pub use lagrange::{interpolate_at_zero, InterpolationError};
pub use share::Share;

use thiserror::Error;

/// Fatal reconstruction failures, surfaced to the caller.
///
/// Per-subset interpolation failures ([`InterpolationError`]) are expected
/// and absorbed inside the consensus engine; they never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// Threshold outside `1..=n`.
    #[error("Invalid threshold {k}: must be at least 1")]
    InvalidParameters { k: usize },
    /// Fewer resolved shares than the threshold requires.
    #[error("Not enough shares to reconstruct: need {needed}, have {have}")]
    InsufficientShares { needed: usize, have: usize },
    /// Every subset failed interpolation; no internally consistent
    /// polynomial exists among the given shares at this threshold.
    #[error("No subset of shares agrees on a secret")]
    NoConsistentSecret,
}
