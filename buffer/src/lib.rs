//! Fixed-capacity circular byte buffers for `no_std` targets.
//!
//! No allocation, no interior locking. A ring is plain data; share one
//! across contexts by wrapping it in whatever lock the platform uses.

#![no_std]

/// Reference bound on backing storage, in bytes. Instantiations may pick
/// any `MAX`; this is the size the demo and test crates build against.
pub const MAX_CAPACITY: usize = 1024;

pub mod error;
pub mod ring;
pub mod state;

#[cfg(test)]
extern crate std;

pub use error::{RingError, RingResult};
pub use ring::ByteRing;
pub use state::StateFaults;
