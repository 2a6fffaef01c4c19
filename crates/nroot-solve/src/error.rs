//! Errors raised by root search.

use nroot_natural::NaturalError;
use thiserror::Error;

/// Errors that can occur while computing an integer root.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RootError {
    /// Only degrees of two and above define a floor root here.
    #[error("root degree must be at least 2, got {degree}")]
    DegreeTooSmall {
        /// The rejected degree.
        degree: u32,
    },

    /// Natural number arithmetic failed during the search.
    #[error(transparent)]
    Arithmetic(#[from] NaturalError),
}
