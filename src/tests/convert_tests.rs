extern crate alloc;
extern crate std;

use crate::{Int32Range, Int64Range, RangeError};
use core::ops::RangeInclusive;
use num_traits::ToPrimitive;

// =============================================================================
// Widening Tests
// =============================================================================

#[test]
fn test_widen_is_lossless() {
    let r = Int32Range::from_to(-7, 9).unwrap();
    let wide = r.widen();
    assert_eq!(wide.bounds(), (-7, 9));
    assert_eq!(wide.count(), 17);
    assert!(!wide.is_readonly());
}

#[test]
fn test_widen_full_domain_keeps_lock() {
    let wide: Int64Range = Int32Range::FULL.into();
    assert_eq!(wide.bounds(), (i64::from(i32::MIN), i64::from(i32::MAX)));
    assert_eq!(wide.span(), u64::from(u32::MAX));
    assert!(wide.is_readonly());
}

// =============================================================================
// Narrowing Tests
// =============================================================================

#[test]
fn test_narrow_in_domain() {
    let r = Int64Range::from_to(i64::from(i32::MIN), i64::from(i32::MAX)).unwrap();
    let narrow = r.narrow().unwrap();
    assert_eq!(narrow, Int32Range::FULL);
    assert!(!narrow.is_readonly());

    let locked = Int64Range::ZERO.narrow().unwrap();
    assert!(locked.is_readonly());
}

#[test]
fn test_narrow_out_of_domain() {
    let r = Int64Range::from_to(-1, i64::from(i32::MAX) + 1).unwrap();
    assert_eq!(
        r.narrow(),
        Err(RangeError::ConversionOverflow {
            from: -1,
            to: i128::from(i32::MAX) + 1,
            bits: 32,
        })
    );

    let below = Int64Range::from_to(i64::from(i32::MIN) - 1, 0).unwrap();
    assert!(Int32Range::try_from(below).is_err());

    assert!(Int64Range::FULL.narrow().is_err());
}

// =============================================================================
// Scalar Conversion Tests
// =============================================================================

#[test]
fn test_scalar_conversions_yield_count() {
    let r = Int64Range::from_to(1000, 1255).unwrap();
    assert_eq!(r.to_u8(), None);
    assert_eq!(r.to_i16(), Some(256));
    assert_eq!(r.to_u32(), Some(256));
    assert_eq!(r.to_i64(), Some(256));
    assert_eq!(r.to_u128(), Some(256));
    assert_eq!(r.to_f64(), Some(256.0));
}

#[test]
fn test_scalar_conversions_full_domain() {
    assert_eq!(Int64Range::FULL.to_u64(), None);
    assert_eq!(Int64Range::FULL.to_u128(), Some(1 << 64));
    assert_eq!(Int64Range::FULL.to_i128(), Some(1 << 64));
    assert_eq!(Int32Range::FULL.to_u32(), None);
    assert_eq!(Int32Range::FULL.to_u64(), Some(1 << 32));
}

#[test]
fn test_spans_multiple() {
    assert!(!Int32Range::ZERO.spans_multiple());
    assert!(Int32Range::from_to(0, 1).unwrap().spans_multiple());
    assert!(Int64Range::FULL.spans_multiple());
}

// =============================================================================
// Std Range Conversion Tests
// =============================================================================

#[test]
fn test_into_range_inclusive() {
    let r = Int32Range::from_to(3, 6).unwrap();
    let std_range: RangeInclusive<i32> = r.into();
    assert_eq!(std_range, 3..=6);
}

#[test]
fn test_try_from_range_inclusive() {
    let r = Int64Range::try_from(-2..=2).unwrap();
    assert_eq!(r.count(), 5);

    #[allow(clippy::reversed_empty_ranges)]
    let inverted = Int64Range::try_from(2..=-2);
    assert_eq!(inverted, Err(RangeError::InvertedBounds { from: 2, to: -2 }));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn widen_then_narrow_is_identity(a in any::<i32>(), b in any::<i32>(), locked in any::<bool>()) {
            let mut r = Int32Range::from_to(a.min(b), a.max(b)).unwrap();
            if locked {
                r.make_readonly();
            }
            let back = r.widen().narrow().unwrap();
            prop_assert_eq!(back, r);
            prop_assert_eq!(back.is_readonly(), locked);
        }

        #[test]
        fn narrow_fails_exactly_outside_domain(a in any::<i64>(), b in any::<i64>()) {
            let r = Int64Range::from_to(a.min(b), a.max(b)).unwrap();
            let fits = i32::try_from(r.from()).is_ok() && i32::try_from(r.to()).is_ok();
            prop_assert_eq!(r.narrow().is_ok(), fits);
        }

        #[test]
        fn to_u128_is_count(from in any::<i64>(), span in any::<u64>()) {
            if let Ok(r) = Int64Range::new(from, span) {
                prop_assert_eq!(r.to_u128(), Some(u128::from(span) + 1));
                prop_assert_eq!(r.spans_multiple(), span > 0);
            }
        }
    }
}
