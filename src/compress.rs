//! Run-length compression of distinct integers into maximal contiguous ranges.
//!
//! [`Runs`] is the one scan every batch operation is built on, so producing,
//! counting and detecting runs always agree on the same input.

use core::iter::FusedIterator;


use crate::bound::RangeBound;
use crate::error::RangeError;
use crate::int_range::IntRange;

/// Iterator over the maximal contiguous runs of an ascending slice.
///
/// Each item is a writable [`IntRange`], in ascending order. A value that is not
/// strictly greater than its predecessor yields
/// [`RangeError::OrderingViolation`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct Runs<'a, T: RangeBound> {
    values: &'a [T],
    position: usize,
}

impl<'a, T: RangeBound> Runs<'a, T> {
    /// Scans `values` as given. They must already be in ascending order.
    #[inline]
    pub fn new(values: &'a [T]) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Returns `true` if the scan has not consumed the whole input yet.
    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.position < self.values.len()
    }
}

impl<T: RangeBound> Iterator for Runs<'_, T> {
    type Item = Result<IntRange<T>, RangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.values.get(self.position)?;
        let mut last = start;
        self.position += 1;

        while let Some(&value) = self.values.get(self.position) {
            if value <= last {
                log::debug!(
                    "value {} at position {} follows {}",
                    value,
                    self.position,
                    last
                );
                let position = self.position;
                self.position = self.values.len();
                return Some(Err(RangeError::OrderingViolation { position }));
            }
            // `checked_add` keeps a run ending at `T::MAX` from wrapping.
            if last.checked_add(&T::ONE) != Some(value) {
                break;
            }
            last = value;
            self.position += 1;
        }

        Some(Ok(IntRange::spanning(start, last)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.values.len() - self.position;
        (usize::from(left > 0), Some(left))
    }
}

impl<T: RangeBound> FusedIterator for Runs<'_, T> {}

fn prepare<T: RangeBound>(values: &mut [T], sort: bool) -> &[T] {
    if sort {
        log::trace!("sorting {} values before compression", values.len());
        values.sort_unstable();
    }
    values
}

impl<T: RangeBound> IntRange<T> {
    /// Compresses distinct values into maximal contiguous ranges, lazily.
    ///
    /// With `sort`, `values` is sorted ascending in place first. Without it the
    /// caller vouches for ascending order, and any violation surfaces as
    /// [`RangeError::OrderingViolation`]. Duplicates are always a violation.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int64Range;
    ///
    /// let mut values = [8, 2, 1, 10, 3, 7];
    /// let ranges: Vec<_> = Int64Range::from_array(&mut values, true)
    ///     .map(|r| r.map(|r| r.bounds()))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(ranges, vec![(1, 3), (7, 8), (10, 10)]);
    /// ```
    pub fn from_array(values: &mut [T], sort: bool) -> Runs<'_, T> {
        Runs::new(prepare(values, sort))
    }

    /// Compresses values the caller guarantees to be ascending.
    #[inline]
    pub fn from_sorted(values: &[T]) -> Runs<'_, T> {
        Runs::new(values)
    }

    /// Counts the ranges [`IntRange::from_array`] would produce.
    pub fn count_ranges(values: &mut [T], sort: bool) -> Result<usize, RangeError> {
        Runs::new(prepare(values, sort)).try_fold(0, |count, run| run.map(|_| count + 1))
    }

    /// Returns `true` if the values form more than one contiguous range.
    ///
    /// The scan stops at the first element of the second range.
    pub fn contains_multiple_ranges(values: &mut [T], sort: bool) -> Result<bool, RangeError> {
        let mut runs = Runs::new(prepare(values, sort));
        match runs.next() {
            None => Ok(false),
            Some(run) => run.map(|_| runs.has_remaining()),
        }
    }
}
