//! Arbitrary precision natural numbers.
//!
//! This module provides a wrapper around `dashu::UBig` exposing the
//! in-place primitives used by integer root search: comparison, addition,
//! floor division, exponentiation, increment, decrement and copy.

use dashu::base::BitTest;
use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::NaturalError;

/// An arbitrary precision non-negative integer.
///
/// Every value owns its digits. `Clone` and [`Natural::copy_from`] are deep
/// copies, so two variables never share mutable state.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Natural(UBig);

impl Natural {
    /// Creates a new natural from a u64.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(UBig::from(value))
    }

    /// Creates a natural from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns [`NaturalError::Parse`] if the string is not a non-negative
    /// integer in `radix`, or if `radix` is outside `2..=36`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, NaturalError> {
        let parse_error = || NaturalError::Parse {
            literal: s.to_owned(),
            radix,
        };
        if !(2..=36).contains(&radix) {
            return Err(parse_error());
        }
        UBig::from_str_radix(s, radix)
            .map(Self)
            .map_err(|_| parse_error())
    }

    /// Compares two naturals by value.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Value equality, consistent with [`Natural::compare`].
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Sets `self` to `self + other`.
    pub fn add(&mut self, other: &Self) {
        self.0 += &other.0;
    }

    /// Sets `self` to `⌊self / divisor⌋`.
    ///
    /// # Errors
    ///
    /// Returns [`NaturalError::DivisionByZero`] if `divisor` is zero, in
    /// which case `self` is left unchanged.
    pub fn divide(&mut self, divisor: &Self) -> Result<(), NaturalError> {
        if divisor.is_zero() {
            return Err(NaturalError::DivisionByZero);
        }
        self.0 = &self.0 / &divisor.0;
        Ok(())
    }

    /// Sets `self` to `self^exp`. `x^0` is one for every `x`, zero included.
    pub fn power(&mut self, exp: u32) {
        self.0 = self.0.pow(exp as usize);
    }

    /// Sets `self` to `self + 1`.
    pub fn increment(&mut self) {
        self.0 += UBig::ONE;
    }

    /// Sets `self` to `self - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`NaturalError::Underflow`] if `self` is zero, in which case
    /// it is left unchanged.
    pub fn decrement(&mut self) -> Result<(), NaturalError> {
        if self.is_zero() {
            return Err(NaturalError::Underflow);
        }
        self.0 -= UBig::ONE;
        Ok(())
    }

    /// Overwrites `self` with a deep copy of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.0.clone_from(&other.0);
    }

    /// Computes self^exp, leaving `self` untouched.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Compares `self^exp` with `target` without building powers larger
    /// than `target`.
    ///
    /// Squaring stops as soon as the running base exceeds `target`, so the
    /// cost is bounded by the size of `target` rather than by `exp`.
    #[must_use]
    pub fn compare_power(&self, exp: u32, target: &Self) -> Ordering {
        if exp == 0 {
            return UBig::ONE.cmp(&target.0);
        }
        // 0^e and 1^e are themselves for e >= 1.
        if self.0 <= UBig::ONE {
            return self.0.cmp(&target.0);
        }

        let mut result = UBig::ONE;
        let mut base = self.0.clone();
        let mut exp = exp;
        loop {
            if exp & 1 == 1 {
                result = &result * &base;
                if result > target.0 {
                    return Ordering::Greater;
                }
            }
            exp >>= 1;
            if exp == 0 {
                return result.cmp(&target.0);
            }
            base = &base * &base;
            // A later set bit multiplies result (>= 1) by at least base.
            if base > target.0 {
                return Ordering::Greater;
            }
        }
    }

    /// Returns the number of bits needed to represent this natural.
    ///
    /// Zero has bit length zero.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns `2^exp`.
    #[must_use]
    pub fn power_of_two(exp: usize) -> Self {
        Self(UBig::ONE << exp)
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }
}

impl One for Natural {
    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Natural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl std::ops::Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        Natural(&self.0 + &rhs.0)
    }
}

impl std::ops::AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        self.0 += &rhs.0;
    }
}

impl std::ops::Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural(&self.0 * &rhs.0)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
