//! Error types for ring buffer operations.
//!
//! Every failure is an ordinary return value classified by the caller.
//! Nothing here is logged, retried, or escalated internally, and there is
//! no fatal/recoverable split at this layer: `Full` and `Empty` are normal
//! flow control, `InvalidState` is a corruption report the buffer refuses
//! to repair on its own.

use core::fmt;

/// Result type for ring buffer operations.
pub type RingResult<T = ()> = Result<T, RingError>;

/// Errors returned by [`ByteRing`](crate::ByteRing) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Requested capacity is zero or exceeds the backing storage bound.
    /// Only produced at initialization time.
    InvalidCapacity { requested: usize },
    /// The buffer's internal fields violate an invariant. Treated as
    /// corruption: the operation performed no mutation. Re-initialization
    /// is the only recovery path.
    InvalidState,
    /// Non-overwriting push against a full buffer. Expected and
    /// recoverable; drain or switch policy.
    Full,
    /// Pop or peek against an empty buffer. Expected and recoverable.
    Empty,
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "requested capacity {} out of range", requested)
            }
            Self::InvalidState => write!(f, "buffer state failed invariant check"),
            Self::Full => write!(f, "buffer full"),
            Self::Empty => write!(f, "buffer empty"),
        }
    }
}
