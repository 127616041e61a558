use core::cmp::Ordering;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use num_traits::{AsPrimitive, One, ToPrimitive, Zero};

use crate::bound::RangeBound;
use crate::error::RangeError;
use crate::int_range::IntRange;

impl<T: RangeBound> IntRange<T> {
    /// Commits a resized or shifted range.
    ///
    /// A writable range is updated in place; a readonly range stays as it is.
    /// Either way the resulting range is returned, unlocked.
    fn apply(&mut self, from: T::Wide, span: T::Wide) -> Result<Self, RangeError> {
        let next = Self::from_wide(from, span)?;
        if !self.is_readonly() {
            *self = next;
        }
        Ok(next)
    }

    /// Returns the smallest range covering both `self` and `other`.
    ///
    /// This is a bounding box, not a set union: the gap between two disjoint
    /// ranges is included.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int64Range;
    ///
    /// let a = Int64Range::from_to(1, 3).unwrap();
    /// let b = Int64Range::from_to(10, 12).unwrap();
    /// assert_eq!(a.union_bounds(&b), Int64Range::from_to(1, 12).unwrap());
    /// ```
    pub fn union_bounds(&self, other: &Self) -> Self {
        let from = self.from().min(other.from());
        let to = self.to().max(other.to());
        Self::spanning(from, to)
    }

    /// Grows the span by `n`.
    ///
    /// # Errors
    /// [`RangeError::ConstructionOverflow`] if the upper bound would overflow.
    pub fn extend(&mut self, n: T::Span) -> Result<Self, RangeError> {
        let span = T::widen_span(self.span()) + T::widen_span(n);
        self.apply(self.from().widen(), span)
    }

    /// Shrinks the span by `n`.
    ///
    /// # Errors
    /// [`RangeError::ConstructionOverflow`] if fewer than one element would remain.
    pub fn shrink(&mut self, n: T::Span) -> Result<Self, RangeError> {
        let span = T::widen_span(self.span()) - T::widen_span(n);
        self.apply(self.from().widen(), span)
    }

    /// `extend(1)`
    #[inline]
    pub fn increment(&mut self) -> Result<Self, RangeError> {
        self.extend(<T::Span as One>::one())
    }

    /// `shrink(1)`
    #[inline]
    pub fn decrement(&mut self) -> Result<Self, RangeError> {
        self.shrink(<T::Span as One>::one())
    }

    /// Moves the whole range `n` values down.
    pub fn shift_down(&mut self, n: T::Span) -> Result<Self, RangeError> {
        let from = self.from().widen() - T::widen_span(n);
        self.apply(from, T::widen_span(self.span()))
    }

    /// Moves the whole range `n` values up.
    pub fn shift_up(&mut self, n: T::Span) -> Result<Self, RangeError> {
        let from = self.from().widen() + T::widen_span(n);
        self.apply(from, T::widen_span(self.span()))
    }

    /// Returns the number of pieces [`IntRange::chunks`] yields for `divisor`.
    pub fn chunk_count(&self, divisor: T::Span) -> Result<T::Wide, RangeError> {
        if divisor.is_zero() {
            return Err(RangeError::InvalidDivisor);
        }
        let size = T::widen_span(divisor);
        Ok((self.count() + size - T::Wide::one()) / size)
    }

    /// Splits the range into consecutive pieces of `divisor` elements each.
    ///
    /// The last piece holds whatever remains and may be shorter. Pieces are
    /// produced lazily, in ascending order, without gaps or overlaps.
    ///
    /// # Errors
    /// [`RangeError::InvalidDivisor`] if `divisor` is zero.
    pub fn chunks(&self, divisor: T::Span) -> Result<Chunks<T>, RangeError> {
        if divisor.is_zero() {
            log::debug!("refused to split {} by zero", self);
            return Err(RangeError::InvalidDivisor);
        }
        Ok(Chunks {
            next: Some(self.from()),
            last: self.to(),
            step: divisor - <T::Span as One>::one(),
        })
    }

    /// Collects [`IntRange::chunks`] into a vector.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int32Range;
    ///
    /// let pieces = Int32Range::from_to(0, 9).unwrap().split_by(4).unwrap();
    /// let bounds: Vec<_> = pieces.iter().map(|r| r.bounds()).collect();
    /// assert_eq!(bounds, vec![(0, 3), (4, 7), (8, 9)]);
    /// ```
    pub fn split_by(&self, divisor: T::Span) -> Result<Vec<Self>, RangeError> {
        Ok(self.chunks(divisor)?.collect())
    }

    /// Orders two ranges by element count, ignoring where they lie.
    ///
    /// The other range may use a different bound width.
    #[inline]
    pub fn compare_by_count<U: RangeBound>(&self, other: &IntRange<U>) -> Ordering {
        let span: u128 = self.span().as_();
        let other_span: u128 = other.span().as_();
        span.cmp(&other_span)
    }

    /// Returns `true` if every element is below `number`.
    #[inline]
    pub fn ends_before(&self, number: T) -> bool {
        self.to() < number
    }

    /// Returns `true` if every element is above `number`.
    #[inline]
    pub fn starts_after(&self, number: T) -> bool {
        self.from() > number
    }
}

/// Iterator over equally sized pieces of a range, created by [`IntRange::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<T: RangeBound> {
    next: Option<T>,
    last: T,
    /// Span of every piece but the last.
    step: T::Span,
}

impl<T: RangeBound> Iterator for Chunks<T> {
    type Item = IntRange<T>;

    fn next(&mut self) -> Option<IntRange<T>> {
        let from = self.next?;
        let to = if T::span_between(from, self.last) <= self.step {
            self.last
        } else {
            T::offset(from, self.step)
        };
        debug_assert!(from <= to && to <= self.last);
        self.next = if to == self.last {
            None
        } else {
            Some(T::offset(to, <T::Span as One>::one()))
        };
        Some(IntRange::spanning(from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(from) = self.next else {
            return (0, Some(0));
        };
        let size = T::widen_span(self.step) + T::Wide::one();
        let count = T::widen_span(T::span_between(from, self.last)) + T::Wide::one();
        match ((count + size - T::Wide::one()) / size).to_usize() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<T: RangeBound> FusedIterator for Chunks<T> {}
