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

use crate::error::IntervalError;
use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{Bound, Range, RangeBounds},
};

/// A half-open integer interval `[lower, upper)`.
///
/// The interval contains every integer `i` with `lower <= i < upper`.
/// When `lower == upper` it is empty and contains nothing. Intervals are
/// plain values: two intervals are equal iff their bounds are equal.
///
/// # Invariants
///
/// `lower` must always be less than or equal to `upper`. The checked
/// constructors enforce this; [`Interval::new_unchecked`] only verifies
/// it in debug builds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<T>",
        bound(deserialize = "T: PrimInt + std::fmt::Display + serde::Deserialize<'de>")
    )
)]
pub struct Interval<T>
where
    T: PrimInt,
{
    lower: T,
    upper: T,
}

/// Unvalidated wire form of an interval, checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    lower: T,
    upper: T,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawInterval<T>> for Interval<T>
where
    T: PrimInt,
{
    type Error = IntervalError<T>;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::try_new(raw.lower, raw.upper)
    }
}

/// An iterator over the integers contained in an [`Interval`], in ascending order.
///
/// The reported length saturates at `usize::MAX` for intervals wider than
/// that (only possible with 64-bit and 128-bit bounds). In that case
/// `size_hint` returns `(usize::MAX, None)` instead of claiming an exact count.
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::math::interval::Interval;
///
/// let iv = Interval::new(1, 5);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalIter<T>
where
    T: PrimInt,
{
    next: T,
    upper: T,
}

impl<T> Iterator for IntervalIter<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.upper {
            let value = self.next;
            self.next = self.next + T::one();
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(width(self.next, self.upper)) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for IntervalIter<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next < self.upper {
            self.upper = self.upper - T::one();
            Some(self.upper)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntervalIter<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        usize::try_from(width(self.next, self.upper)).unwrap_or(usize::MAX)
    }
}

impl<T> FusedIterator for IntervalIter<T> where T: PrimInt {}

/// Number of integers in `[lower, upper)`, zero when `upper <= lower`.
///
/// Computed outside `T`: a signed interval can be wider than `T::max_value()`.
#[inline]
fn width<T>(lower: T, upper: T) -> u128
where
    T: PrimInt,
{
    if upper <= lower {
        return 0;
    }
    match (lower.to_i128(), upper.to_i128()) {
        (Some(lower), Some(upper)) => upper.abs_diff(lower),
        // Only `u128` bounds above `i128::MAX` land here, and those are non-negative.
        _ => (upper - lower).to_u128().unwrap_or(u128::MAX),
    }
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "Invalid interval: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Creates a new `Interval`, rejecting reversed bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBounds`] if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{error::IntervalError, math::interval::Interval};
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert_eq!(
    ///     Interval::try_new(10, 0),
    ///     Err(IntervalError::InvalidBounds { lower: 10, upper: 0 })
    /// );
    /// ```
    #[inline]
    pub fn try_new(lower: T, upper: T) -> Result<Self, IntervalError<T>> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(IntervalError::InvalidBounds { lower, upper })
        }
    }

    /// Creates a new `Interval` without checking its bounds in release builds.
    ///
    /// The caller must ensure `lower <= upper`. Every operation on an
    /// interval built in violation of this is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let iv = Interval::new_unchecked(0, 10);
    /// assert_eq!(iv.upper(), 10);
    /// ```
    #[inline]
    pub fn new_unchecked(lower: T, upper: T) -> Self {
        debug_assert!(
            lower <= upper,
            "Invalid interval: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Creates the empty interval `[point, point)`.
    #[inline]
    pub fn empty_at(point: T) -> Self {
        Self {
            lower: point,
            upper: point,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns the number of integers in the interval.
    ///
    /// The count is a `u128`, which holds the width of any interval over
    /// any primitive integer, including `[i64::MIN, i64::MAX)` whose width
    /// does not fit in `i64` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(10, 20).len(), 10);
    /// assert_eq!(Interval::new(-3, 3).len(), 6);
    /// assert_eq!(Interval::new(i8::MIN, i8::MAX).len(), 255);
    /// ```
    #[inline]
    pub fn len(&self) -> u128 {
        width(self.lower, self.upper)
    }

    /// Returns `true` if the interval contains no integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(10, 10).is_empty());
    /// assert!(!Interval::new(10, 11).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns `true` if `value` lies in `[lower, upper)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(9));
    /// assert!(!iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value < self.upper
    }

    /// Returns `true` if every integer of `other` is also in `self`.
    ///
    /// An empty `other` is contained in any interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.contains_interval(Interval::new(2, 8)));
    /// assert!(a.contains_interval(Interval::new(0, 10)));
    /// assert!(!a.contains_interval(Interval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        other.is_empty() || (self.lower <= other.lower && other.upper <= self.upper)
    }

    /// Returns `true` if the two intervals share at least one integer.
    ///
    /// Intervals that merely touch (`a.upper == b.lower`) do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.overlaps(Interval::new(5, 15)));
    /// assert!(!a.overlaps(Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        max(self.lower, other.lower) < min(self.upper, other.upper)
    }

    /// Returns the integers common to both intervals, or `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.intersection(Interval::new(5, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(a.intersection(Interval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let lower = max(self.lower, other.lower);
        let upper = min(self.upper, other.upper);

        if lower < upper {
            Some(Self::new_unchecked(lower, upper))
        } else {
            None
        }
    }

    /// Returns an iterator over the integers in the interval.
    #[inline]
    pub fn iter(&self) -> IntervalIter<T> {
        IntervalIter {
            next: self.lower,
            upper: self.upper,
        }
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::empty_at(T::zero())
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

impl<T> RangeBounds<T> for Interval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(&self.upper)
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
    T: PrimInt,
{
    type Error = IntervalError<T>;

    #[inline]
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::try_new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.lower..iv.upper
    }
}
