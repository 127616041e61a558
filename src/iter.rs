use core::iter::FusedIterator;

use alloc::vec;
use alloc::vec::Vec;

use num_traits::{AsPrimitive, One, ToPrimitive, Zero};

use crate::bound::RangeBound;
use crate::error::RangeError;
use crate::int_range::IntRange;

/// Iterator over the members of a range, optionally stepping over some.
///
/// The next member is computed in `T::Wide`, so a range ending at `T::MAX`
/// terminates instead of wrapping around.
#[derive(Debug, Clone)]
pub struct Members<T: RangeBound> {
    next: Option<T>,
    last: T,
    step: T::Wide,
}

impl<T: RangeBound> Members<T> {
    fn new(range: &IntRange<T>, step: T::Wide) -> Self {
        Self {
            next: Some(range.from()),
            last: range.to(),
            step,
        }
    }

    fn remaining(&self) -> T::Wide {
        match self.next {
            Some(next) => (self.last.widen() - next.widen()) / self.step + T::Wide::one(),
            None => T::Wide::zero(),
        }
    }
}

impl<T: RangeBound> Iterator for Members<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = T::narrow(current.widen() + self.step).filter(|next| *next <= self.last);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().to_usize() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<T: RangeBound> FusedIterator for Members<T> {}

impl<T: RangeBound> IntRange<T> {
    /// Iterates every member from `from` to `to`. Each call starts over.
    #[inline]
    pub fn iter(&self) -> Members<T> {
        Members::new(self, T::Wide::one())
    }

    /// Iterates every `step`-th member, starting at `from`.
    ///
    /// # Errors
    /// [`RangeError::InvalidStride`] if `step` is zero or exceeds the count.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int32Range;
    ///
    /// let range = Int32Range::from_to(0, 10).unwrap();
    /// let even: Vec<_> = range.stepping(2).unwrap().collect();
    /// assert_eq!(even, vec![0, 2, 4, 6, 8, 10]);
    /// assert!(range.stepping(0).is_err());
    /// ```
    pub fn stepping(&self, step: T::Span) -> Result<Members<T>, RangeError> {
        let wide_step = T::widen_span(step);
        if step.is_zero() || wide_step > self.count() {
            log::debug!("rejected stepping {} for {}", step, self);
            let count: i128 = self.count().as_();
            return Err(RangeError::InvalidStride {
                step: step.as_(),
                count: count.unsigned_abs(),
            });
        }
        Ok(Members::new(self, wide_step))
    }

    /// Writes every `step`-th member into the front of `buffer`.
    ///
    /// Stops when either the members or the buffer run out and returns the
    /// number of values written.
    pub fn fill(&self, step: T::Span, buffer: &mut [T]) -> Result<usize, RangeError> {
        let mut written = 0;
        for (slot, value) in buffer.iter_mut().zip(self.stepping(step)?) {
            *slot = value;
            written += 1;
        }
        Ok(written)
    }

    /// Collects every `step`-th member into a vector sized up front.
    ///
    /// # Errors
    /// - [`RangeError::InvalidStride`] as for [`IntRange::stepping`].
    /// - [`RangeError::TooManyMembers`] if the member count does not fit `usize`.
    pub fn to_vec(&self, step: T::Span) -> Result<Vec<T>, RangeError> {
        let members = self.stepping(step)?.remaining();
        let len = members.to_usize().ok_or_else(|| {
            let count: i128 = members.as_();
            RangeError::TooManyMembers {
                count: count.unsigned_abs(),
            }
        })?;
        let mut buffer = vec![T::ZERO; len];
        self.fill(step, &mut buffer)?;
        Ok(buffer)
    }

    /// Iterates every value from `start` through `T::MAX`.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int32Range;
    ///
    /// let tail: Vec<_> = Int32Range::enumerate_from(i32::MAX - 2).collect();
    /// assert_eq!(tail, vec![i32::MAX - 2, i32::MAX - 1, i32::MAX]);
    /// ```
    #[inline]
    pub fn enumerate_from(start: T) -> Members<T> {
        Self::spanning(start, T::MAX).iter()
    }
}

impl<T: RangeBound> IntoIterator for IntRange<T> {
    type Item = T;
    type IntoIter = Members<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RangeBound> IntoIterator for &IntRange<T> {
    type Item = T;
    type IntoIter = Members<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
