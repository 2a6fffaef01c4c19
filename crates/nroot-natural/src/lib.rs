//! # nroot-natural
//!
//! Arbitrary precision natural numbers for nroot.
//!
//! This crate wraps `dashu` to provide [`Natural`], a non-negative integer
//! of unbounded magnitude with the in-place primitives needed by integer
//! root search.
//!
//! Operations that could leave the naturals (division by zero, decrementing
//! zero) return a [`NaturalError`] and leave the operand unchanged.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod natural;

#[cfg(test)]
mod proptests;

pub use error::NaturalError;
pub use natural::Natural;
