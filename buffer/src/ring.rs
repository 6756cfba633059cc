//! Fixed-capacity byte ring buffer with a defensive validity gate.
//!
//! Backing storage is a `[u8; MAX]` array baked in at compile time; the
//! logical capacity is chosen at initialization and may be anything in
//! `1..=MAX`, so one static declaration serves differently-sized rings
//! without reallocation. `head` is the next write index, `tail` the next
//! read index. The separate `count` field is what tells a full ring from
//! an empty one, since both states have `head == tail`.
//!
//! The two push policies are separate operations, not a flag:
//! [`ByteRing::push_overwrite`] evicts the oldest byte when full (and
//! accounts for it), [`ByteRing::try_push`] rejects with
//! [`RingError::Full`]. Every mutating or reading operation re-validates
//! the invariants first and fails with [`RingError::InvalidState`] once
//! state has been corrupted from outside; nothing attempts repair.

use crate::error::{RingError, RingResult};
use crate::state::StateFaults;

/// Byte-oriented circular FIFO over `MAX` bytes of inline storage.
///
/// ```
/// use bytering_buffer::ByteRing;
///
/// let mut ring: ByteRing<16> = ByteRing::new(4)?;
/// ring.try_push(0xAA)?;
/// ring.try_push(0xBB)?;
/// assert_eq!(ring.pop()?, 0xAA);
/// # Ok::<(), bytering_buffer::RingError>(())
/// ```
#[derive(Debug)]
pub struct ByteRing<const MAX: usize> {
    storage: [u8; MAX],
    capacity: usize,
    head: usize,
    tail: usize,
    count: usize,
    overflow_count: u32,
}

impl<const MAX: usize> ByteRing<MAX> {
    /// Const-construct an uninitialized ring, usable in `static` items.
    ///
    /// The result is invalid (capacity 0): every gated operation returns
    /// [`RingError::InvalidState`] until [`init`](ByteRing::init) runs.
    pub const fn uninit() -> Self {
        Self {
            storage: [0; MAX],
            capacity: 0,
            head: 0,
            tail: 0,
            count: 0,
            overflow_count: 0,
        }
    }

    /// Create a ring with the given logical capacity.
    pub fn new(capacity: usize) -> RingResult<Self> {
        let mut ring = Self::uninit();
        ring.init(capacity)?;
        Ok(ring)
    }

    /// (Re)initialize: record `capacity` and zero all cursors and counters.
    ///
    /// Fails with [`RingError::InvalidCapacity`] for 0 or anything over
    /// `MAX`. Runs no validity gate and fully overwrites prior state, so
    /// it discards previous contents and doubles as the recovery path for
    /// a corrupt ring.
    pub fn init(&mut self, capacity: usize) -> RingResult {
        if capacity == 0 || capacity > MAX {
            return Err(RingError::InvalidCapacity {
                requested: capacity,
            });
        }
        self.capacity = capacity;
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        self.overflow_count = 0;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Validity gate
    // -----------------------------------------------------------------------

    /// Short-circuit invariant check: capacity in `1..=MAX`, both cursors
    /// inside `[0, capacity)`, occupancy no greater than capacity.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.capacity <= MAX
            && self.capacity > 0
            && self.head < self.capacity
            && self.tail < self.capacity
            && self.count <= self.capacity
    }

    /// Full invariant scan, reporting every violated check.
    pub fn faults(&self) -> StateFaults {
        StateFaults::scan(MAX, self.capacity, self.head, self.tail, self.count)
    }

    #[inline]
    fn validate(&self) -> RingResult {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RingError::InvalidState)
        }
    }

    // -----------------------------------------------------------------------
    // Mutating operations
    // -----------------------------------------------------------------------

    /// Push a byte, evicting the oldest one when full.
    ///
    /// On a full ring the eviction advances `tail`, decrements `count`
    /// and bumps the overflow counter exactly once, so the subsequent
    /// write leaves `count` at capacity with the oldest byte replaced.
    /// Never fails with [`RingError::Full`].
    pub fn push_overwrite(&mut self, byte: u8) -> RingResult {
        self.validate()?;
        if self.count == self.capacity {
            // Full: evict the oldest byte and account for the drop.
            self.tail = (self.tail + 1) % self.capacity;
            self.count -= 1;
            self.overflow_count = self.overflow_count.saturating_add(1);
        }
        self.storage[self.head] = byte;
        self.head = (self.head + 1) % self.capacity;
        self.count += 1;
        Ok(())
    }

    /// Push a byte without overwrite; fails with [`RingError::Full`]
    /// when the ring is at capacity. Leaves the overflow counter alone.
    pub fn try_push(&mut self, byte: u8) -> RingResult {
        self.validate()?;
        if self.count == self.capacity {
            return Err(RingError::Full);
        }
        self.storage[self.head] = byte;
        self.head = (self.head + 1) % self.capacity;
        self.count += 1;
        Ok(())
    }

    /// Pop the oldest byte; fails with [`RingError::Empty`] when none.
    pub fn pop(&mut self) -> RingResult<u8> {
        self.validate()?;
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        let byte = self.storage[self.tail];
        self.tail = (self.tail + 1) % self.capacity;
        self.count -= 1;
        Ok(byte)
    }

    /// Read the oldest byte without removing it. Repeatable; no cursor
    /// or count moves.
    pub fn peek(&self) -> RingResult<u8> {
        self.validate()?;
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        Ok(self.storage[self.tail])
    }

    /// Pop up to `out.len()` bytes into `out` in FIFO order, returning
    /// how many were drained. An empty ring drains 0 bytes; that is not
    /// an error. Useful for pulling a whole backlog out of a
    /// mutex-wrapped ring under a single lock acquisition.
    pub fn drain_into(&mut self, out: &mut [u8]) -> RingResult<usize> {
        self.validate()?;
        let n = self.count.min(out.len());
        for slot in out.iter_mut().take(n) {
            *slot = self.storage[self.tail];
            self.tail = (self.tail + 1) % self.capacity;
        }
        self.count -= n;
        Ok(n)
    }

    /// Empty the ring: zero both cursors and the occupancy count.
    ///
    /// Capacity is kept, and so is the overflow counter, which has its
    /// own [`clear_overflow_count`](ByteRing::clear_overflow_count).
    pub fn reset(&mut self) -> RingResult {
        self.validate()?;
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Overflow accounting
    // -----------------------------------------------------------------------

    /// Cumulative count of bytes evicted by [`push_overwrite`]. Saturates
    /// at `u32::MAX`; independent of the occupancy count; only cleared
    /// explicitly.
    ///
    /// [`push_overwrite`]: ByteRing::push_overwrite
    pub fn overflow_count(&self) -> RingResult<u32> {
        self.validate()?;
        Ok(self.overflow_count)
    }

    /// Zero the overflow counter. Buffered bytes are untouched.
    pub fn clear_overflow_count(&mut self) -> RingResult {
        self.validate()?;
        self.overflow_count = 0;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of buffered bytes. An invalid ring reads as 0.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.is_valid() { self.count } else { 0 }
    }

    /// Whether the ring holds no bytes.
    ///
    /// An invalid or uninitialized ring also reports `true` here, even
    /// though the gated operations report [`RingError::InvalidState`]
    /// for the same condition. `len` and `is_full` degrade the same way
    /// (0 and `false`); there is nothing readable either way.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_valid() || self.count == 0
    }

    /// Whether occupancy has reached capacity. `false` for an invalid
    /// ring, consistent with [`is_empty`](ByteRing::is_empty).
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.is_valid() && self.count == self.capacity
    }

    /// Configured logical capacity; 0 before [`init`](ByteRing::init).
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compile-time bound of the backing storage.
    #[inline]
    pub const fn max_capacity(&self) -> usize {
        MAX
    }
}

impl<const MAX: usize> Default for ByteRing<MAX> {
    fn default() -> Self {
        Self::uninit()
    }
}
