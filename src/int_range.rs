use core::fmt;
use core::hash::{Hash, Hasher};

use num_traits::{AsPrimitive, One, Saturating};

use crate::bound::RangeBound;
use crate::error::RangeError;

/// A closed, contiguous integer range `from..=to`.
///
/// The range stores its lower bound and its *span*, the element count minus one.
/// Storing the span instead of the count lets a range cover the whole domain of
/// `T`: the full `i32` range holds 2^32 elements, which `u32` cannot count, but
/// its span `u32::MAX` fits.
///
/// # Type Parameters
/// - `T`: The bound type (`i32` or `i64`). Defaults to `i64`.
///
/// # Invariants
/// - `from + span` never leaves the domain of `T`. Every constructor and mutator
///   checks this in `T::Wide` before committing.
/// - A readonly range never changes. Mutators return
///   [`RangeError::LockedStateViolation`] instead.
///
/// # Identity
/// Equality and hashing consider `from` and `span` only; the readonly flag is
/// not part of a range's identity.
#[derive(Clone, Copy)]
pub struct IntRange<T: RangeBound = i64> {
    from: T,
    span: T::Span,
    to: T,
    locked: bool,
}

impl<T: RangeBound> IntRange<T> {
    /// The single-element range `0..=0`.
    pub const ZERO: Self = Self {
        from: T::ZERO,
        span: T::SPAN_ZERO,
        to: T::ZERO,
        locked: true,
    };

    /// Every value of `T`.
    pub const FULL: Self = Self {
        from: T::MIN,
        span: T::SPAN_MAX,
        to: T::MAX,
        locked: true,
    };

    /// Every value below zero.
    pub const NEGATIVE: Self = Self {
        from: T::MIN,
        span: T::NEGATIVE_SPAN,
        to: T::MINUS_ONE,
        locked: true,
    };

    /// Every value above zero.
    pub const POSITIVE: Self = Self {
        from: T::ONE,
        span: T::POSITIVE_SPAN,
        to: T::MAX,
        locked: true,
    };

    /// Builds an unlocked range from a lower bound and span given in the wide type.
    ///
    /// Every bound check funnels through here. Inputs may lie anywhere in
    /// `T::Wide`; a saturated upper bound never narrows, so it is rejected too.
    pub(crate) fn from_wide(from: T::Wide, span: T::Wide) -> Result<Self, RangeError> {
        let to = from.saturating_add(span);
        match (T::narrow(from), T::narrow_span(span), T::narrow(to)) {
            (Some(from), Some(span), Some(to)) => Ok(Self {
                from,
                span,
                to,
                locked: false,
            }),
            _ => {
                log::debug!("rejected range {}..={}", from, to);
                Err(RangeError::ConstructionOverflow {
                    from: from.as_(),
                    to: to.as_(),
                })
            }
        }
    }

    /// Builds an unlocked range from bounds already known to satisfy `from <= to`.
    #[inline]
    pub(crate) fn spanning(from: T, to: T) -> Self {
        Self {
            from,
            span: T::span_between(from, to),
            to,
            locked: false,
        }
    }

    pub(crate) fn ensure_writable(&self) -> Result<(), RangeError> {
        if self.locked {
            log::debug!("refused to modify readonly range {}", self);
            return Err(RangeError::LockedStateViolation);
        }
        Ok(())
    }

    /// Creates a writable range starting at `from` holding `span + 1` elements.
    ///
    /// # Errors
    /// [`RangeError::ConstructionOverflow`] if `from + span` exceeds `T`'s maximum.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::{Int32Range, RangeError};
    ///
    /// let range = Int32Range::new(-2, 4).unwrap();
    /// assert_eq!(range.to(), 2);
    /// assert_eq!(range.count(), 5);
    ///
    /// assert!(matches!(
    ///     Int32Range::new(i32::MAX, 1),
    ///     Err(RangeError::ConstructionOverflow { .. })
    /// ));
    /// ```
    #[inline]
    pub fn new(from: T, span: T::Span) -> Result<Self, RangeError> {
        Self::from_wide(from.widen(), T::widen_span(span))
    }

    /// Like [`IntRange::new`], but the range starts out readonly.
    #[inline]
    pub fn new_readonly(from: T, span: T::Span) -> Result<Self, RangeError> {
        let mut range = Self::new(from, span)?;
        range.locked = true;
        Ok(range)
    }

    /// Creates a writable range from inclusive bounds.
    ///
    /// # Errors
    /// [`RangeError::InvertedBounds`] if `to < from`.
    #[inline]
    pub fn from_to(from: T, to: T) -> Result<Self, RangeError> {
        if to < from {
            log::debug!("rejected inverted bounds {}..={}", from, to);
            return Err(RangeError::InvertedBounds {
                from: from.as_(),
                to: to.as_(),
            });
        }
        Ok(Self::spanning(from, to))
    }

    /// Like [`IntRange::from_to`], but the range starts out readonly.
    #[inline]
    pub fn from_to_readonly(from: T, to: T) -> Result<Self, RangeError> {
        let mut range = Self::from_to(from, to)?;
        range.locked = true;
        Ok(range)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn from(&self) -> T {
        self.from
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn to(&self) -> T {
        self.to
    }

    /// Returns `(from, to)`.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.from, self.to)
    }

    /// Returns the element count minus one.
    #[inline]
    pub fn span(&self) -> T::Span {
        self.span
    }

    /// Returns the number of elements, between 1 and 2^`T::BITS`.
    #[inline]
    pub fn count(&self) -> T::Wide {
        T::widen_span(self.span) + T::Wide::one()
    }

    /// Returns `true` if the range refuses in-place changes.
    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.locked
    }

    /// Moves the lower bound, keeping the span.
    ///
    /// # Errors
    /// - [`RangeError::LockedStateViolation`] if the range is readonly.
    /// - [`RangeError::ConstructionOverflow`] if the new upper bound would overflow.
    pub fn set_from(&mut self, from: T) -> Result<(), RangeError> {
        self.ensure_writable()?;
        *self = Self::from_wide(from.widen(), T::widen_span(self.span))?;
        Ok(())
    }

    /// Replaces the span, keeping the lower bound.
    pub fn set_span(&mut self, span: T::Span) -> Result<(), RangeError> {
        self.ensure_writable()?;
        *self = Self::from_wide(self.from.widen(), T::widen_span(span))?;
        Ok(())
    }

    /// Replaces the element count, keeping the lower bound.
    ///
    /// A count below one or above 2^`T::BITS` is rejected with
    /// [`RangeError::ConstructionOverflow`]: a range always holds at least one
    /// element.
    pub fn set_count(&mut self, count: T::Wide) -> Result<(), RangeError> {
        self.ensure_writable()?;
        let span = count.saturating_sub(T::Wide::one());
        *self = Self::from_wide(self.from.widen(), span)?;
        Ok(())
    }

    /// Returns `from + index`.
    ///
    /// Valid indices run from `0` to `span` inclusive.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::Int64Range;
    ///
    /// let range = Int64Range::from_to(10, 12).unwrap();
    /// assert_eq!(range.at(2), Ok(12));
    /// assert!(range.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: T::Span) -> Result<T, RangeError> {
        let out_of_range = RangeError::IndexOutOfRange {
            index: index.as_(),
            span: self.span.as_(),
        };
        if index > self.span {
            return Err(out_of_range);
        }
        T::narrow(self.from.widen() + T::widen_span(index)).ok_or(out_of_range)
    }

    /// Returns `true` if `number` lies within `from..=to`.
    #[inline]
    pub fn is_match(&self, number: T) -> bool {
        number >= self.from && number <= self.to
    }

    /// Returns `true` if `other` lies entirely within this range.
    ///
    /// The other range may use a different bound width.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::{Int32Range, Int64Range};
    ///
    /// let outer = Int64Range::from_to(-100, 100).unwrap();
    /// let inner = Int32Range::from_to(-5, 5).unwrap();
    /// assert!(outer.is_match_range(&inner));
    /// assert!(!inner.is_match_range(&outer));
    /// ```
    #[inline]
    pub fn is_match_range<U: RangeBound>(&self, other: &IntRange<U>) -> bool {
        let (from, to): (i128, i128) = (self.from.as_(), self.to.as_());
        let (other_from, other_to): (i128, i128) = (other.from().as_(), other.to().as_());
        other_from >= from && other_to <= to
    }

    /// Locks the range against in-place changes. Locking is irreversible; calling
    /// this on a readonly range does nothing.
    #[inline]
    pub fn make_readonly(&mut self) -> &mut Self {
        self.locked = true;
        self
    }

    /// Returns a writable copy with the same bounds.
    #[inline]
    pub fn create_writable(&self) -> Self {
        Self {
            locked: false,
            ..*self
        }
    }
}

impl<T: RangeBound> PartialEq for IntRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.span == other.span
    }
}

impl<T: RangeBound> Eq for IntRange<T> {}

impl<T: RangeBound> Hash for IntRange<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.span.hash(state);
    }
}

impl<T: RangeBound> fmt::Debug for IntRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntRange")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("locked", &self.locked)
            .finish()
    }
}

impl<T: RangeBound> fmt::Display for IntRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} ({})", self.from, self.to, self.count())
    }
}
