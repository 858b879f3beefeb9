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

use crate::math::{interval::Interval, split::split};
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::{cmp::max, ops::Range};

/// Splitting for plain [`std::ops::Range`] values.
///
/// A range whose `start` exceeds its `end` is empty as far as the standard
/// library is concerned, and is treated the same way here.
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::math::range_ext::RangeSplitExt;
///
/// let remnants = (0..10).split_against(&(6..9));
/// assert_eq!(remnants.as_slice(), &[0..6, 9..10]);
///
/// assert!((0..10).split_against(&(0..10)).is_empty());
/// ```
pub trait RangeSplitExt<T> {
    /// Returns the maximal sub-ranges of `self` that share no integer with `subtrahend`.
    fn split_against(&self, subtrahend: &Range<T>) -> SmallVec<[Range<T>; 2]>;
}

impl<T> RangeSplitExt<T> for Range<T>
where
    T: PrimInt,
{
    fn split_against(&self, subtrahend: &Range<T>) -> SmallVec<[Range<T>; 2]> {
        split(as_interval(self), as_interval(subtrahend))
            .into_iter()
            .map(Range::from)
            .collect()
    }
}

#[inline]
fn as_interval<T>(range: &Range<T>) -> Interval<T>
where
    T: PrimInt,
{
    Interval::new_unchecked(range.start, max(range.start, range.end))
}
