//! Combinatorial consensus over candidate secrets.
//!
//! The engine interpolates every k-sized subset of the shares and tallies
//! the results; the most frequent candidate is the reconstructed secret.
//! This is a deliberate brute-force design: the work is `O(C(n, k))`
//! subsets, each costing `O(k^2)` big-integer multiplications. For the
//! small n this scheme targets that is fine; callers with large n should
//! impose a deadline externally or plug in a smarter [`SubsetStrategy`].
//!
//! The tally lives on this call's stack and is discarded once the winner
//! is extracted, so the engine is reentrant.

use crate::lagrange::interpolate_at_zero;
use crate::share::Share;
use crate::ReconstructError;
use itertools::Itertools;
use num_bigint::BigInt;
use std::collections::HashMap;

/// Produces the candidate subsets the engine will vote over.
///
/// The one capability a decoder needs: given the ordered share slice and
/// the threshold, yield k-sized selections in a deterministic order. The
/// default [`Exhaustive`] strategy tries everything; a future
/// error-correcting decoder could yield far fewer subsets without
/// touching the voting logic.
pub trait SubsetStrategy {
    fn subsets<'a>(
        &self,
        shares: &'a [Share],
        k: usize,
    ) -> Box<dyn Iterator<Item = Vec<&'a Share>> + 'a>;
}

/// Enumerates all `C(n, k)` subsets in lexicographic order.
pub struct Exhaustive;

impl SubsetStrategy for Exhaustive {
    fn subsets<'a>(
        &self,
        shares: &'a [Share],
        k: usize,
    ) -> Box<dyn Iterator<Item = Vec<&'a Share>> + 'a> {
        Box::new(shares.iter().combinations(k))
    }
}

/// One tally entry: how often a candidate appeared, and the enumeration
/// index of the first subset that produced it (the tie-breaker).
struct Vote {
    count: usize,
    first_seen: usize,
}

/// Reconstruct the secret from `shares` at threshold `k` by exhaustive
/// subset voting.
///
/// Per-subset interpolation failures are expected and absorbed: a subset
/// that is not internally consistent simply casts no vote. Only the fatal
/// conditions in [`ReconstructError`] are surfaced.
///
/// Ties between equally frequent candidates go to the candidate first
/// produced in the fixed enumeration order (shares sorted by ascending x,
/// subsets in lexicographic order), so identical input always yields an
/// identical result.
pub fn reconstruct_secret(shares: &[Share], k: usize) -> Result<BigInt, ReconstructError> {
    reconstruct_secret_with(&Exhaustive, shares, k)
}

/// [`reconstruct_secret`] with a caller-supplied enumeration strategy.
pub fn reconstruct_secret_with(
    strategy: &impl SubsetStrategy,
    shares: &[Share],
    k: usize,
) -> Result<BigInt, ReconstructError> {
    if k == 0 {
        return Err(ReconstructError::InvalidParameters { k });
    }
    if shares.len() < k {
        return Err(ReconstructError::InsufficientShares {
            needed: k,
            have: shares.len(),
        });
    }

    // Fix the enumeration order regardless of how the caller ordered the
    // shares, so the tie-break is a property of the share *set*.
    let mut ordered = shares.to_vec();
    ordered.sort_by(|a, b| a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y)));

    let mut tally: HashMap<BigInt, Vote> = HashMap::new();

    for (index, subset) in strategy.subsets(&ordered, k).enumerate() {
        let points: Vec<Share> = subset.into_iter().cloned().collect();
        match interpolate_at_zero(&points) {
            Ok(candidate) => {
                tally
                    .entry(candidate)
                    .and_modify(|vote| vote.count += 1)
                    .or_insert(Vote {
                        count: 1,
                        first_seen: index,
                    });
            }
            Err(err) => {
                // Routine: this subset contains at least one bad share.
                log::trace!("Subset {} cast no vote: {}", index, err);
            }
        }
    }

    let winner = tally
        .into_iter()
        .max_by(|(_, a), (_, b)| {
            a.count
                .cmp(&b.count)
                .then(b.first_seen.cmp(&a.first_seen))
        })
        .map(|(candidate, _)| candidate)
        .ok_or(ReconstructError::NoConsistentSecret)?;

    Ok(winner)
}
