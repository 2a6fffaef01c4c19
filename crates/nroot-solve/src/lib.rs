//! Integer root extraction for nroot.
//!
//! This crate computes `⌊n^(1/r)⌋` for arbitrary precision naturals `n`
//! and degrees `r >= 2`:
//!
//! - **Binary search** over candidate roots, using only natural number
//!   comparison, addition, halving, exponentiation and ±1 steps
//! - **Configurable start interval** via [`SearchBound`]
//! - **Self-check** of any claimed root via [`verify_root`]
//!
//! # Example
//!
//! ```
//! use nroot_natural::Natural;
//! use nroot_solve::{verify_root, RootFinder, SearchBound};
//!
//! let n: Natural = "170141183460469231731687303715884105727".parse().unwrap();
//! let finder = RootFinder::new().with_bound(SearchBound::BitLength);
//! let r = finder.root(&n, 6).unwrap();
//!
//! assert_eq!(r.to_string(), "2353973");
//! assert!(verify_root(&n, 6, &r));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bound;
pub mod error;
pub mod root;
pub mod verify;


pub use bound::SearchBound;
pub use error::RootError;
pub use root::{root, root_in_place, RootFinder, SearchStats};
pub use verify::verify_root;
