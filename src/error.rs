use thiserror::Error;

/// Errors produced by range construction, mutation and the batch operations.
///
/// Offending values are widened to `i128`/`u128` so a single error type serves
/// every bound width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The requested bounds are not representable by the bound type, or the
    /// span would drop below a single element.
    #[error("bounds {from}..={to} are not representable")]
    ConstructionOverflow { from: i128, to: i128 },

    /// `from_to` was called with `to < from`.
    #[error("upper bound {to} is lower than {from}")]
    InvertedBounds { from: i128, to: i128 },

    /// A readonly range was asked to change in place.
    #[error("range is readonly")]
    LockedStateViolation,

    /// Index access outside `0..=span`.
    #[error("index {index} is outside of 0..={span}")]
    IndexOutOfRange { index: u128, span: u128 },

    /// Stepping of zero or larger than the element count.
    #[error("stepping {step} must be between 1 and {count}")]
    InvalidStride { step: u128, count: u128 },

    /// A compression scan found a value not strictly greater than its predecessor.
    #[error("value at position {position} is not in strictly ascending order")]
    OrderingViolation { position: usize },

    /// Splitting with a divisor of zero.
    #[error("divisor must be at least 1")]
    InvalidDivisor,

    /// Narrowing a range whose bounds do not fit the target width.
    #[error("bounds {from}..={to} do not fit a {bits} bit range")]
    ConversionOverflow { from: i128, to: i128, bits: u32 },

    /// Materializing more members than a buffer can address.
    #[error("{count} members do not fit in memory")]
    TooManyMembers { count: u128 },
}
