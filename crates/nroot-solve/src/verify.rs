//! Independent check of a floor root.

use nroot_natural::Natural;
use std::cmp::Ordering;

/// Returns true if `candidate^degree <= n < (candidate + 1)^degree`.
///
/// This only compares powers against `n`, so it can vet a result without
/// trusting the search that produced it.
#[must_use]
pub fn verify_root(n: &Natural, degree: u32, candidate: &Natural) -> bool {
    if candidate.compare_power(degree, n) == Ordering::Greater {
        return false;
    }
    let mut next = candidate.clone();
    next.increment();
    next.compare_power(degree, n) == Ordering::Greater
}
