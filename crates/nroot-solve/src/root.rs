//! Floor r-th roots by binary search over candidate roots.
//!
//! The search keeps an interval `[low, high]` known to contain
//! `⌊n^(1/r)⌋` and halves it by comparing `mid^r` against `n`. Only
//! natural number primitives are used: no floating point, and no value
//! ever goes negative.
//!
//! # Example
//!
//! ```
//! use nroot_natural::Natural;
//! use nroot_solve::root;
//!
//! let n: Natural = "189943527".parse().unwrap();
//! assert_eq!(root(&n, 2).unwrap().to_u64(), Some(13782));
//! ```

use nroot_natural::Natural;
use num_traits::Zero;
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::bound::SearchBound;
use crate::RootError;

/// Counters collected by a single root search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of midpoints whose power was compared against `n`.
    pub iterations: u64,
    /// Whether `n` is a perfect power of the requested degree.
    pub exact: bool,
}

/// A configured integer root solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootFinder {
    bound: SearchBound,
}

impl RootFinder {
    /// Creates a solver searching from `high = n`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial upper bound strategy.
    #[must_use]
    pub fn with_bound(mut self, bound: SearchBound) -> Self {
        self.bound = bound;
        self
    }

    /// Returns the configured upper bound strategy.
    #[must_use]
    pub fn bound(&self) -> SearchBound {
        self.bound
    }

    /// Computes `⌊n^(1/degree)⌋`, leaving `n` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::DegreeTooSmall`] if `degree < 2`.
    pub fn root(&self, n: &Natural, degree: u32) -> Result<Natural, RootError> {
        self.root_with_stats(n, degree).map(|(result, _)| result)
    }

    /// Replaces `n` with `⌊n^(1/degree)⌋`.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::DegreeTooSmall`] if `degree < 2`; `n` is left
    /// unchanged.
    pub fn root_in_place(&self, n: &mut Natural, degree: u32) -> Result<(), RootError> {
        let result = self.root(n, degree)?;
        n.copy_from(&result);
        Ok(())
    }

    /// Computes `⌊n^(1/degree)⌋` along with search counters.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::DegreeTooSmall`] if `degree < 2`.
    pub fn root_with_stats(
        &self,
        n: &Natural,
        degree: u32,
    ) -> Result<(Natural, SearchStats), RootError> {
        if degree < 2 {
            return Err(RootError::DegreeTooSmall { degree });
        }

        let two = Natural::new(2);
        let mut low = Natural::zero();
        let mut high = self.bound.upper_bound(n, degree);
        let mut best = high.clone();
        let mut mid = Natural::zero();
        let mut stats = SearchStats::default();

        while low <= high && !stats.exact {
            mid.copy_from(&low);
            mid.add(&high);
            mid.divide(&two)?;
            stats.iterations += 1;

            // mid^degree against n, never materializing powers above n.
            let ordering = mid.compare_power(degree, n);
            trace!(iteration = stats.iterations, %mid, ?ordering, "root search step");

            match ordering {
                Ordering::Equal => {
                    best.copy_from(&mid);
                    stats.exact = true;
                }
                Ordering::Less => {
                    best.copy_from(&mid);
                    low.copy_from(&mid);
                    low.increment();
                }
                // mid^r > n >= 0 means mid >= 1.
                Ordering::Greater => {
                    high.copy_from(&mid);
                    high.decrement()?;
                }
            }
        }

        debug!(
            degree,
            bound = ?self.bound,
            iterations = stats.iterations,
            exact = stats.exact,
            "root search finished"
        );
        Ok((best, stats))
    }
}

/// Computes `⌊n^(1/degree)⌋` with the default solver, leaving `n` untouched.
///
/// # Errors
///
/// Returns [`RootError::DegreeTooSmall`] if `degree < 2`.
pub fn root(n: &Natural, degree: u32) -> Result<Natural, RootError> {
    RootFinder::new().root(n, degree)
}

/// Replaces `n` with `⌊n^(1/degree)⌋` using the default solver.
///
/// # Errors
///
/// Returns [`RootError::DegreeTooSmall`] if `degree < 2`; `n` is left
/// unchanged.
pub fn root_in_place(n: &mut Natural, degree: u32) -> Result<(), RootError> {
    RootFinder::new().root_in_place(n, degree)
}
