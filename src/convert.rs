//! Conversions between range widths, into scalars, and to and from std ranges.
//!
//! Scalar conversions go through [`ToPrimitive`] and always yield the element
//! *count*, never a bound.

use core::ops::RangeInclusive;

use num_traits::{AsPrimitive, One, ToPrimitive};

use crate::bound::RangeBound;
use crate::error::RangeError;
use crate::int_range::IntRange;

impl<T: RangeBound> IntRange<T> {
    /// Returns `true` if the range holds more than one element.
    #[inline]
    pub fn spans_multiple(&self) -> bool {
        self.span() >= <T::Span as One>::one()
    }

    fn with_lock_of<U: RangeBound>(mut self, source: &IntRange<U>) -> Self {
        if source.is_readonly() {
            self.make_readonly();
        }
        self
    }
}

impl IntRange<i32> {
    /// Converts into a 64 bit range. Never fails; the readonly flag is kept.
    #[inline]
    pub fn widen(self) -> IntRange<i64> {
        IntRange::spanning(i64::from(self.from()), i64::from(self.to())).with_lock_of(&self)
    }
}

impl IntRange<i64> {
    /// Converts into a 32 bit range; the readonly flag is kept.
    ///
    /// # Errors
    /// [`RangeError::ConversionOverflow`] if either bound lies outside `i32`.
    ///
    /// # Examples
    /// ```
    /// use int_ranges::{Int64Range, RangeError};
    ///
    /// let small = Int64Range::from_to(-7, 7).unwrap();
    /// assert_eq!(small.narrow().unwrap().bounds(), (-7, 7));
    ///
    /// let large = Int64Range::from_to(0, i64::from(i32::MAX) + 1).unwrap();
    /// assert!(matches!(large.narrow(), Err(RangeError::ConversionOverflow { .. })));
    /// ```
    pub fn narrow(self) -> Result<IntRange<i32>, RangeError> {
        match (i32::try_from(self.from()), i32::try_from(self.to())) {
            (Ok(from), Ok(to)) => Ok(IntRange::spanning(from, to).with_lock_of(&self)),
            _ => {
                log::debug!("cannot narrow {} to 32 bits", self);
                Err(RangeError::ConversionOverflow {
                    from: self.from().into(),
                    to: self.to().into(),
                    bits: i32::BITS,
                })
            }
        }
    }
}

impl From<IntRange<i32>> for IntRange<i64> {
    #[inline]
    fn from(range: IntRange<i32>) -> Self {
        range.widen()
    }
}

impl TryFrom<IntRange<i64>> for IntRange<i32> {
    type Error = RangeError;

    #[inline]
    fn try_from(range: IntRange<i64>) -> Result<Self, Self::Error> {
        range.narrow()
    }
}

impl<T: RangeBound> From<IntRange<T>> for RangeInclusive<T> {
    #[inline]
    fn from(range: IntRange<T>) -> Self {
        range.from()..=range.to()
    }
}

impl<T: RangeBound> TryFrom<RangeInclusive<T>> for IntRange<T> {
    type Error = RangeError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (from, to) = range.into_inner();
        IntRange::from_to(from, to)
    }
}

/// Every conversion yields the element count, or `None` if it does not fit.
///
/// # Examples
/// ```
/// use int_ranges::Int32Range;
/// use num_traits::ToPrimitive;
///
/// let range = Int32Range::from_to(-1000, 1000).unwrap();
/// assert_eq!(range.to_u16(), Some(2001));
/// assert_eq!(range.to_u8(), None);
/// assert_eq!(Int32Range::FULL.to_u64(), Some(1 << 32));
/// ```
impl<T: RangeBound> ToPrimitive for IntRange<T> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.count().to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.count().to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        Some(self.count().as_())
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.count().to_u128()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.count().to_f64()
    }
}
