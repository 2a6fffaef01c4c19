//! Errors raised by natural number arithmetic.

use thiserror::Error;

/// Errors that can occur while operating on a [`Natural`](crate::Natural).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NaturalError {
    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Decrementing zero would leave the naturals.
    #[error("decrement of zero underflows the naturals")]
    Underflow,

    /// The literal was not a non-negative integer in the requested base.
    #[error("invalid natural number literal {literal:?} in base {radix}")]
    Parse {
        /// The rejected input.
        literal: String,
        /// The base it was parsed in.
        radix: u32,
    },
}
