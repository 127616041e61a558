#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use int_ranges::Int64Range;
//!
//! // The inclusive range -2..=2 (defaults to i64 bounds)
//! let range = Int64Range::from_to(-2, 2).unwrap();
//!
//! assert_eq!(range.from(), -2);
//! assert_eq!(range.to(), 2);
//! assert_eq!(range.count(), 5);
//! assert!(range.is_match(0));
//!
//! // Iterate over the members
//! let members: Vec<_> = range.iter().collect();
//! assert_eq!(members, vec![-2, -1, 0, 1, 2]);
//! ```
//!
//! # Bound Type Support
//!
//! `IntRange` supports `i32` and `i64` bounds. The element count minus one is
//! stored as the unsigned type of the same width, so even the full domain fits:
//!
//! ```rust
//! use int_ranges::{Int32Range, Int64Range};
//!
//! assert_eq!(Int32Range::FULL.span(), u32::MAX);
//! assert_eq!(Int32Range::FULL.count(), 1i64 << 32);
//! assert_eq!(Int64Range::FULL.count(), 1i128 << 64);
//! ```
//!
//! # Compression
//!
//! Distinct integers compress into their maximal contiguous runs:
//!
//! ```rust
//! use int_ranges::Int32Range;
//!
//! let mut values = [1, 2, 3, 7, 8, 10];
//! assert_eq!(Int32Range::count_ranges(&mut values, false), Ok(3));
//! assert_eq!(Int32Range::contains_multiple_ranges(&mut values, false), Ok(true));
//! ```
//!
//! # Readonly Ranges
//!
//! A readonly range refuses in-place changes. Resizing and shifting operations
//! hand back a new writable range instead:
//!
//! ```rust
//! use int_ranges::{Int64Range, RangeError};
//!
//! let mut zero = Int64Range::ZERO;
//! assert_eq!(zero.set_from(5), Err(RangeError::LockedStateViolation));
//!
//! let grown = zero.extend(2).unwrap();
//! assert_eq!(grown.bounds(), (0, 2));
//! assert_eq!(zero.bounds(), (0, 0));
//! ```

extern crate alloc;

mod algebra;
mod bound;
mod compress;
mod convert;
mod error;
mod int_range;
mod iter;

pub use algebra::Chunks;
pub use bound::RangeBound;
pub use compress::Runs;
pub use error::RangeError;
pub use int_range::IntRange;
pub use iter::Members;

/// Range with 32 bit signed bounds.
pub type Int32Range = IntRange<i32>;

/// Range with 64 bit signed bounds.
pub type Int64Range = IntRange<i64>;

#[cfg(test)]
#[path = "tests/int_range_tests.rs"]
mod int_range_tests;

#[cfg(test)]
#[path = "tests/algebra_tests.rs"]
mod algebra_tests;

#[cfg(test)]
#[path = "tests/compress_tests.rs"]
mod compress_tests;

#[cfg(test)]
#[path = "tests/iter_tests.rs"]
mod iter_tests;

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod convert_tests;
