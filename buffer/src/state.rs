//! State-fault diagnostics for the validity gate.
//!
//! The ring validates its own fields before every operation so that a
//! buffer placed in uncontrolled memory (static storage, shared regions,
//! DMA-adjacent scratch space) cannot walk the cursors out of bounds after
//! external corruption. The gate itself is a short-circuit boolean check;
//! this module carries the slower full-scan variant that reports *which*
//! invariants are broken, for callers and tooling that want more than
//! a refusal.

use bitflags::bitflags;

bitflags! {
    /// Set of invariant violations detected on a ring buffer.
    ///
    /// An empty set means the buffer passed validation. A corrupt buffer
    /// frequently violates several invariants at once (a garbage
    /// `capacity` usually drags `head`/`tail`/`count` out of range with
    /// it), so the faults are reported as a set rather than first-failure.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StateFaults: u8 {
        /// Capacity is zero: the buffer was never initialized (or was
        /// zeroed wholesale).
        const CAPACITY_ZERO  = 1 << 0;
        /// Capacity exceeds the backing storage bound.
        const CAPACITY_RANGE = 1 << 1;
        /// Write cursor is outside `[0, capacity)`.
        const HEAD_RANGE     = 1 << 2;
        /// Read cursor is outside `[0, capacity)`.
        const TAIL_RANGE     = 1 << 3;
        /// Occupancy count exceeds capacity.
        const COUNT_RANGE    = 1 << 4;
    }
}

impl StateFaults {
    /// Scan a ring's raw fields against the invariants.
    ///
    /// Each fault is an independent comparison against the recorded
    /// capacity, in the order the boolean gate short-circuits in:
    /// capacity bound, capacity nonzero, head range, tail range, count
    /// range. A zero capacity therefore faults both cursors as well,
    /// since `[0, 0)` contains no valid index.
    pub(crate) fn scan(max: usize, capacity: usize, head: usize, tail: usize, count: usize) -> Self {
        let mut faults = StateFaults::empty();
        if capacity > max {
            faults |= StateFaults::CAPACITY_RANGE;
        }
        if capacity == 0 {
            faults |= StateFaults::CAPACITY_ZERO;
        }
        if head >= capacity {
            faults |= StateFaults::HEAD_RANGE;
        }
        if tail >= capacity {
            faults |= StateFaults::TAIL_RANGE;
        }
        if count > capacity {
            faults |= StateFaults::COUNT_RANGE;
        }
        faults
    }
}
