// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # RangeKit Core
//!
//! Splitting of half-open integer intervals. Given a target `[a, b)` and a
//! subtrahend `[c, d)`, [`split`] returns the pieces of the target that
//! survive once every integer of the subtrahend is removed. It is the
//! building block for code that tracks sets of non-overlapping ranges,
//! such as downloaded versus missing byte ranges or free-space lists.
//!
//! ## Modules
//!
//! - `math`: the [`Interval`] type, the [`split`] operation, and the
//!   [`RangeSplitExt`] extension for `std::ops::Range`.
//! - `error`: [`IntervalError`], raised when constructing an interval whose
//!   lower bound exceeds its upper bound.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Interval`]. Deserialisation
//!   re-checks the bounds.
//!
//! ## Example
//!
//! ```rust
//! use rangekit_core::{split, Interval};
//!
//! let missing = Interval::new(0u64, 4096);
//! let downloaded = Interval::new(1024, 2048);
//!
//! let still_missing = split(missing, downloaded);
//! assert_eq!(
//!     still_missing.as_slice(),
//!     &[Interval::new(0, 1024), Interval::new(2048, 4096)]
//! );
//! ```

pub mod error;
pub mod math;

pub use error::IntervalError;
pub use math::{
    interval::{Interval, IntervalIter},
    range_ext::RangeSplitExt,
    split::{split, Remnants},
};
