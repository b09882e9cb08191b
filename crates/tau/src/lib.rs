#![cfg_attr(not(test), warn(unused_crate_dependencies))]

//! Counting of epsilon-admissible reduced forms per discriminant.
//!
//! A triple `(a, b, c)` with `b <= a <= c` has discriminant magnitude
//! `X = 4ac - b^2`. For a contiguous range of `X`, [`count_tau`] enumerates
//! every triple inside the window given by [`Thresholds`], counts each one twice
//! (its conjugate with negative real part is never enumerated) into a packed
//! [`CountingBuffer`], and returns the largest count seen. The count may
//! exceed the true number of forms; it is only ever used as an upper bound.

/// Magnitude of a discriminant.
pub type Discriminant = u64;

/// Largest discriminant whose triples can be formed without overflow. With
/// `a <= c <= sqrt(X)`, `4ac` stays below `4 * MAX_DISCRIMINANT` plus the
/// slack of a floating point `sqrt` rounded up.
pub const MAX_DISCRIMINANT: Discriminant = Discriminant::MAX / 8;

mod error;
pub use error::*;

mod packing;
pub use packing::*;

mod buffer;
pub use buffer::*;

mod bounds;
pub use bounds::*;

mod thresholds;
pub use thresholds::*;

mod count;
pub use count::*;
