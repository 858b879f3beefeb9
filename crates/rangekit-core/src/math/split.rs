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

//! Splitting one interval against another.
//!
//! The split of `target` against `subtrahend` is the ordered list of
//! maximal sub-intervals of `target` that share no integer with
//! `subtrahend`. Picture `|-------|` as an interval:
//!
//! ```text
//! target         |-----------|
//! subtrahend          |--|
//! remnants       |----|  |---|
//! ```
//!
//! There are never more than two remnants, so results are returned in a
//! [`SmallVec`] that stays on the stack.

use crate::math::interval::Interval;
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::cmp::{max, min};

/// The pieces of a target interval left over after a split.
///
/// Remnants are non-empty, pairwise disjoint, and ordered by lower bound.
pub type Remnants<T> = SmallVec<[Interval<T>; 2]>;

/// Removes `subtrahend` from `target` and returns what is left.
///
/// The result holds:
/// * 0 intervals: if `subtrahend` covers every integer of `target`, or `target` is empty.
/// * 1 interval: if `subtrahend` clips one side of `target`, or shares no integer with it.
/// * 2 intervals: if `subtrahend` lies strictly inside `target`.
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::math::{interval::Interval, split::split};
///
/// let target = Interval::new(0, 10);
///
/// let remnants = split(target, Interval::new(6, 9));
/// assert_eq!(remnants.as_slice(), &[Interval::new(0, 6), Interval::new(9, 10)]);
///
/// assert!(split(target, Interval::new(0, 10)).is_empty());
/// assert_eq!(split(target, Interval::new(10, 20)).as_slice(), &[target]);
/// ```
pub fn split<T>(target: Interval<T>, subtrahend: Interval<T>) -> Remnants<T>
where
    T: PrimInt,
{
    let mut remnants = Remnants::new();

    let cut_lower = max(target.lower(), subtrahend.lower());
    let cut_upper = min(target.upper(), subtrahend.upper());

    if cut_lower >= cut_upper {
        // Nothing in common; an empty target still yields nothing.
        if !target.is_empty() {
            remnants.push(target);
        }
    } else {
        if target.lower() < cut_lower {
            remnants.push(Interval::new_unchecked(target.lower(), cut_lower));
        }
        if cut_upper < target.upper() {
            remnants.push(Interval::new_unchecked(cut_upper, target.upper()));
        }
    }

    tracing::trace!(remnants = remnants.len(), "split interval");
    remnants
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Splits this interval against `subtrahend`.
    ///
    /// Equivalent to [`split(*self, subtrahend)`](split).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::math::interval::Interval;
    ///
    /// let remnants = Interval::new(5, 10).split_against(Interval::new(0, 7));
    /// assert_eq!(remnants.as_slice(), &[Interval::new(7, 10)]);
    /// ```
    #[inline]
    pub fn split_against(&self, subtrahend: Self) -> Remnants<T> {
        split(*self, subtrahend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn iv(lower: i32, upper: i32) -> Interval<i32> {
        Interval::new(lower, upper)
    }

    #[rstest]
    // |-------|
    // |-------|
    #[case::equal(iv(0, 10), iv(0, 10), vec![])]
    // |-------|
    // |-----|
    #[case::shared_lower_bound(iv(0, 10), iv(0, 7), vec![iv(7, 10)])]
    // |-------|
    //    |----|
    #[case::shared_upper_bound(iv(0, 10), iv(6, 10), vec![iv(0, 6)])]
    // |-------|
    //   |---|
    #[case::interior(iv(0, 10), iv(6, 9), vec![iv(0, 6), iv(9, 10)])]
    //      |-------|
    // |-------|
    #[case::overlaps_lower_bound(iv(5, 10), iv(0, 7), vec![iv(7, 10)])]
    //         |-------|
    // |-------|
    #[case::touches_lower_bound(iv(5, 10), iv(0, 5), vec![iv(5, 10)])]
    // |-------|
    //      |-------|
    #[case::overlaps_upper_bound(iv(5, 10), iv(7, 15), vec![iv(5, 7)])]
    // |-------|
    //         |-------|
    #[case::touches_upper_bound(iv(5, 10), iv(10, 15), vec![iv(5, 10)])]
    //               |-------|
    // |-------|
    #[case::disjoint_left(iv(10, 15), iv(0, 5), vec![iv(10, 15)])]
    // |-------|
    //               |-------|
    #[case::disjoint_right(iv(10, 15), iv(20, 25), vec![iv(10, 15)])]
    //         |-------|
    // |-----------------------|
    #[case::swallowed(iv(10, 15), iv(0, 25), vec![])]
    fn test_split_scenarios(
        #[case] target: Interval<i32>,
        #[case] subtrahend: Interval<i32>,
        #[case] expected: Vec<Interval<i32>>,
    ) {
        assert_eq!(split(target, subtrahend).to_vec(), expected);
        assert_eq!(target.split_against(subtrahend).to_vec(), expected);
    }

    #[rstest]
    #[case::empty_target(iv(5, 5), iv(0, 10), vec![])]
    #[case::empty_target_outside(iv(50, 50), iv(0, 10), vec![])]
    #[case::empty_subtrahend_inside(iv(0, 10), iv(5, 5), vec![iv(0, 10)])]
    #[case::empty_subtrahend_at_lower(iv(0, 10), iv(0, 0), vec![iv(0, 10)])]
    #[case::single_point_removed(iv(0, 10), iv(4, 5), vec![iv(0, 4), iv(5, 10)])]
    #[case::first_point_removed(iv(0, 10), iv(-3, 1), vec![iv(1, 10)])]
    #[case::last_point_removed(iv(0, 10), iv(9, 12), vec![iv(0, 9)])]
    #[case::single_point_target(iv(3, 4), iv(3, 4), vec![])]
    #[case::negative_bounds(iv(-10, -2), iv(-6, -4), vec![iv(-10, -6), iv(-4, -2)])]
    fn test_split_degenerate_cases(
        #[case] target: Interval<i32>,
        #[case] subtrahend: Interval<i32>,
        #[case] expected: Vec<Interval<i32>>,
    ) {
        assert_eq!(split(target, subtrahend).to_vec(), expected);
    }

    #[test]
    fn test_split_unsigned_at_type_limits() {
        let target = Interval::new(0u8, u8::MAX);
        assert_eq!(
            split(target, Interval::new(0, 1)).to_vec(),
            vec![Interval::new(1, u8::MAX)]
        );
        assert_eq!(
            split(target, Interval::new(254, u8::MAX)).to_vec(),
            vec![Interval::new(0, 254)]
        );
        assert!(split(target, target).is_empty());
    }

    #[test]
    fn test_split_does_not_spill() {
        let remnants = split(iv(0, 10), iv(3, 4));
        assert!(!remnants.spilled());
    }

    fn interval_strategy() -> impl Strategy<Value = Interval<i32>> {
        (-40i32..40, 0i32..30).prop_map(|(lower, width)| Interval::new(lower, lower + width))
    }

    fn non_empty_interval_strategy() -> impl Strategy<Value = Interval<i32>> {
        (-40i32..40, 1i32..30).prop_map(|(lower, width)| Interval::new(lower, lower + width))
    }

    /// Any `u8` bound, with the type limits drawn often.
    fn u8_bound_strategy() -> impl Strategy<Value = u8> {
        prop_oneof![
            Just(0u8),
            Just(1u8),
            Just(u8::MAX - 1),
            Just(u8::MAX),
            any::<u8>(),
        ]
    }

    fn u8_interval_strategy() -> impl Strategy<Value = Interval<u8>> {
        (u8_bound_strategy(), u8_bound_strategy())
            .prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
    }

    fn check_split_laws<T>(
        target: Interval<T>,
        subtrahend: Interval<T>,
    ) -> Result<(), TestCaseError>
    where
        T: PrimInt + std::fmt::Debug,
    {
        let remnants = split(target, subtrahend);

        prop_assert!(remnants.len() <= 2);

        for r in &remnants {
            prop_assert!(r.lower() < r.upper());
            prop_assert!(target.contains_interval(*r));
            prop_assert!(!r.overlaps(subtrahend));
        }

        for pair in remnants.windows(2) {
            // Ordered and separated by at least one removed integer.
            prop_assert!(pair[0].upper() < pair[1].lower());
        }

        // Every point of the target is either kept or removed, never both.
        for point in target {
            let kept = remnants.iter().filter(|r| r.contains(point)).count();
            let removed = subtrahend.contains(point);
            prop_assert_eq!(kept, usize::from(!removed));
        }

        let kept_total: u128 = remnants.iter().map(|r| r.len()).sum();
        let removed_total = target.intersection(subtrahend).map_or(0, |i| i.len());
        prop_assert_eq!(kept_total + removed_total, target.len());

        if !target.overlaps(subtrahend) && !target.is_empty() {
            prop_assert_eq!(remnants.to_vec(), vec![target]);
        }
        if subtrahend.contains_interval(target) {
            prop_assert!(remnants.is_empty());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn test_split_laws(
            target in interval_strategy(),
            subtrahend in interval_strategy(),
        ) {
            check_split_laws(target, subtrahend)?;
        }

        #[test]
        fn test_split_laws_unsigned_full_range(
            target in u8_interval_strategy(),
            subtrahend in u8_interval_strategy(),
        ) {
            check_split_laws(target, subtrahend)?;
        }

        #[test]
        fn test_split_identity_when_disjoint(
            target in non_empty_interval_strategy(),
            gap in 0i32..10,
            width in 0i32..10,
            on_left in any::<bool>(),
        ) {
            let subtrahend = if on_left {
                Interval::new(target.lower() - gap - width, target.lower() - gap)
            } else {
                Interval::new(target.upper() + gap, target.upper() + gap + width)
            };
            prop_assert_eq!(split(target, subtrahend).to_vec(), vec![target]);
        }

        #[test]
        fn test_split_annihilation_when_covered(
            target in interval_strategy(),
            left in 0i32..10,
            right in 0i32..10,
        ) {
            let subtrahend = Interval::new(target.lower() - left, target.upper() + right);
            prop_assert!(split(target, subtrahend).is_empty());
        }
    }
}
