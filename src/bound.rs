use core::fmt;
use core::hash::Hash;

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Trait for signed integer types that can bound an `IntRange`.
///
/// This trait is sealed and only implemented for `i32` and `i64`. Each bound
/// type pairs with an unsigned `Span` of the same width, which stores the
/// element count minus one, and a `Wide` type at least one bit wider, in which
/// every bound and count computation is carried out before it is narrowed back.
///
/// | Bound | Span  | Wide   | Max count |
/// |-------|-------|--------|-----------|
/// | `i32` | `u32` | `i64`  | 2^32      |
/// | `i64` | `u64` | `i128` | 2^64      |
pub trait RangeBound:
    private::Sealed
    + PrimInt
    + Signed
    + Hash
    + fmt::Debug
    + fmt::Display
    + AsPrimitive<i128>
    + 'static
{
    /// Unsigned storage for the element count minus one.
    type Span: PrimInt + Unsigned + Hash + fmt::Debug + fmt::Display + AsPrimitive<u128> + 'static;

    /// Intermediate type wide enough to hold `MIN + SPAN_MAX + 1` without wrapping.
    type Wide: PrimInt + Signed + fmt::Debug + fmt::Display + AsPrimitive<i128> + 'static;

    /// Width of the bound type in bits.
    const BITS: u32;

    const ZERO: Self;
    const ONE: Self;
    const MINUS_ONE: Self;
    const MIN: Self;
    const MAX: Self;

    const SPAN_ZERO: Self::Span;
    const SPAN_MAX: Self::Span;

    /// Span of `MIN..=-1`.
    const NEGATIVE_SPAN: Self::Span;

    /// Span of `1..=MAX`.
    const POSITIVE_SPAN: Self::Span;

    /// Lossless conversion into the wide type.
    fn widen(self) -> Self::Wide;

    /// Lossless conversion of a span into the wide type.
    fn widen_span(span: Self::Span) -> Self::Wide;

    /// Checked conversion back from the wide type.
    fn narrow(wide: Self::Wide) -> Option<Self>;

    /// Checked conversion of a wide value into a span.
    fn narrow_span(wide: Self::Wide) -> Option<Self::Span>;

    /// Distance `to - from` as a span. Only meaningful for `from <= to`.
    fn span_between(from: Self, to: Self) -> Self::Span;

    /// `from + by`. Only meaningful when the sum fits `Self`.
    fn offset(from: Self, by: Self::Span) -> Self;
}

macro_rules! impl_range_bound {
    ($t:ty, $span:ty, $wide:ty) => {
        impl RangeBound for $t {
            type Span = $span;
            type Wide = $wide;

            const BITS: u32 = <$t>::BITS;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MINUS_ONE: Self = -1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            const SPAN_ZERO: $span = 0;
            const SPAN_MAX: $span = <$span>::MAX;
            const NEGATIVE_SPAN: $span = <$t>::MAX as $span;
            const POSITIVE_SPAN: $span = (<$t>::MAX - 1) as $span;

            #[inline]
            fn widen(self) -> $wide {
                <$wide>::from(self)
            }

            #[inline]
            fn widen_span(span: $span) -> $wide {
                <$wide>::from(span)
            }

            #[inline]
            fn narrow(wide: $wide) -> Option<Self> {
                <$t>::try_from(wide).ok()
            }

            #[inline]
            fn narrow_span(wide: $wide) -> Option<$span> {
                <$span>::try_from(wide).ok()
            }

            #[inline]
            fn span_between(from: Self, to: Self) -> $span {
                debug_assert!(from <= to, "from must not exceed to");
                // Two's complement: the wrapped difference reinterpreted as unsigned is exact.
                to.wrapping_sub(from) as $span
            }

            #[inline]
            fn offset(from: Self, by: $span) -> Self {
                debug_assert!(
                    <$wide>::from(from) + <$wide>::from(by) <= <$wide>::from(<$t>::MAX),
                    "offset leaves the domain"
                );
                from.wrapping_add(by as $t)
            }
        }
    };
}

impl_range_bound!(i32, u32, i64);
impl_range_bound!(i64, u64, i128);
