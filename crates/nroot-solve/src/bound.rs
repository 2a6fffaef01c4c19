//! Initial upper bounds for the root search interval.

use nroot_natural::Natural;

/// How the search chooses the top of its starting interval `[0, high]`.
///
/// Every choice is at least the true floor root, so the result does not
/// depend on it; only the number of halving steps does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchBound {
    /// `high = n`. Valid for every `n` and every degree of at least 2,
    /// but takes about `bitlen(n)` steps regardless of the degree.
    #[default]
    Input,
    /// `high = 2^⌈bitlen(n) / r⌉`.
    ///
    /// Since `n < 2^bitlen(n)`, the r-th root of `n` is below
    /// `2^(bitlen(n) / r)`. The search then takes about `bitlen(n) / r`
    /// steps.
    BitLength,
}

impl SearchBound {
    /// Returns the starting upper bound for the `degree`-th root of `n`.
    ///
    /// Root search only asks for `degree >= 2`. Degree 1 still yields a
    /// bound at or above `n`.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is zero and the bound is [`SearchBound::BitLength`].
    #[must_use]
    pub fn upper_bound(self, n: &Natural, degree: u32) -> Natural {
        match self {
            SearchBound::Input => n.clone(),
            SearchBound::BitLength => {
                Natural::power_of_two(n.bit_len().div_ceil(degree as usize))
            }
        }
    }
}
