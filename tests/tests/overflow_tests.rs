//! Overwrite accounting and wrap-around behavior.

use bytering_buffer::{ByteRing, MAX_CAPACITY, RingError};
use bytering_tests::{drain_to_vec, push_all};

#[test]
fn test_overwrite_drops_oldest_and_counts() {
    let mut ring = ByteRing::<MAX_CAPACITY>::new(5).unwrap();
    push_all(&mut ring, &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();

    assert_eq!(ring.len(), 5);
    assert_eq!(ring.overflow_count().unwrap(), 3);
    assert_eq!(drain_to_vec(&mut ring).unwrap(), vec![3, 4, 5, 6, 7]);
    // Draining does not clear the counter.
    assert_eq!(ring.overflow_count().unwrap(), 3);
}

#[test]
fn test_wrap_around_interleaved() {
    // Five pushes, three pops, five more pushes into capacity 8. The
    // second batch wraps past the end of storage; the drain must still
    // come out oldest-first with nothing lost or duplicated.
    let mut ring = ByteRing::<MAX_CAPACITY>::new(8).unwrap();
    for _ in 0..5 {
        ring.push_overwrite(253).unwrap();
    }
    for _ in 0..3 {
        assert_eq!(ring.pop().unwrap(), 253);
    }
    for _ in 0..5 {
        ring.push_overwrite(112).unwrap();
    }

    assert_eq!(ring.len(), 7);
    assert_eq!(
        drain_to_vec(&mut ring).unwrap(),
        vec![253, 253, 112, 112, 112, 112, 112]
    );
    assert_eq!(ring.pop(), Err(RingError::Empty));
    // Occupancy never reached capacity, so nothing was dropped.
    assert_eq!(ring.overflow_count().unwrap(), 0);
}

#[test]
fn test_reject_policy_never_touches_counter() {
    let mut ring = ByteRing::<MAX_CAPACITY>::new(3).unwrap();
    for byte in 0u8..3 {
        ring.try_push(byte).unwrap();
    }
    for byte in 3u8..6 {
        assert_eq!(ring.try_push(byte), Err(RingError::Full));
    }
    assert_eq!(ring.overflow_count().unwrap(), 0);
    assert_eq!(drain_to_vec(&mut ring).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_counter_survives_reset_until_cleared() {
    let mut ring = ByteRing::<MAX_CAPACITY>::new(2).unwrap();
    push_all(&mut ring, &[1, 2, 3, 4]).unwrap();
    assert_eq!(ring.overflow_count().unwrap(), 2);

    ring.reset().unwrap();
    assert_eq!(ring.overflow_count().unwrap(), 2);
    assert!(ring.is_empty());

    ring.clear_overflow_count().unwrap();
    assert_eq!(ring.overflow_count().unwrap(), 0);

    // A fresh init also starts the counter over.
    push_all(&mut ring, &[5, 6, 7]).unwrap();
    assert_eq!(ring.overflow_count().unwrap(), 1);
    ring.init(2).unwrap();
    assert_eq!(ring.overflow_count().unwrap(), 0);
}

#[test]
fn test_overwrite_on_capacity_one() {
    let mut ring = ByteRing::<MAX_CAPACITY>::new(1).unwrap();
    push_all(&mut ring, b"abc").unwrap();
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.overflow_count().unwrap(), 2);
    assert_eq!(ring.pop().unwrap(), b'c');
}
