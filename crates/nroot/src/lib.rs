//! # nroot
//!
//! Floor r-th roots of arbitrary precision natural numbers, computed with
//! integer arithmetic only.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: naturals of unbounded size backed by `dashu`
//! - **Exact Results**: `k^r <= n < (k + 1)^r` holds for every answer `k`
//! - **Binary Search**: halving over candidate roots, no floating point
//!
//! ## Quick Start
//!
//! ```rust
//! use nroot::prelude::*;
//!
//! let n: Natural = "189943527".parse().unwrap();
//! let r = root(&n, 2).unwrap();
//! assert_eq!(r.to_u64(), Some(13782));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use nroot_natural as natural;
pub use nroot_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nroot_natural::{Natural, NaturalError};
    pub use nroot_solve::{root, root_in_place, verify_root, RootError, RootFinder, SearchBound};
}
