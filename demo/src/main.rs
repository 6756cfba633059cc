//! Test drive for the byte ring: the classic two-message walk-through
//! (one message that fits, one that overwrites), the strict push policy,
//! and a static ring shared between two threads.
//!
//! Payload bytes go to stdout; operational narration goes through
//! `tracing` (filter with `RUST_LOG`, default `info`).

use bytering_buffer::{ByteRing, MAX_CAPACITY, RingError, RingResult};
use spin::Mutex;
use std::thread;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Relay = ByteRing<MAX_CAPACITY>;

const RELAY_CAPACITY: usize = 32;
const RELAY_MESSAGE: &[u8] = b"Relayed through a shared ring.\n";

static RELAY: Mutex<Relay> = Mutex::new(Relay::uninit());

/// Pop everything currently buffered, in FIFO order, as printable text.
fn drain_to_string(ring: &mut Relay) -> RingResult<String> {
    let mut chunk = [0u8; 64];
    let mut out = String::new();
    loop {
        let n = ring.drain_into(&mut chunk)?;
        if n == 0 {
            break;
        }
        out.push_str(&String::from_utf8_lossy(&chunk[..n]));
    }
    Ok(out)
}

fn main() -> RingResult {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Two messages, one small enough to fit entirely in the buffer, the
    // other too large for it.
    let regular = b"Regular message.\n";
    let oversized = b"Message with overwrite.\n";

    // Size the ring for the regular message, plus some slack.
    let capacity = regular.len() + 5;
    let mut ring = Relay::new(capacity)?;
    tracing::info!("ring ready: capacity {} of max {}", capacity, ring.max_capacity());

    for &byte in regular {
        ring.push_overwrite(byte)?;
    }
    tracing::info!("buffered {} bytes, overflow count {}", ring.len(), ring.overflow_count()?);
    print!("{}", drain_to_string(&mut ring)?);

    // Start from scratch, then push a message that cannot fit. The
    // overwrite policy drops the oldest bytes and counts every drop.
    ring.init(capacity)?;
    for &byte in oversized {
        ring.push_overwrite(byte)?;
    }
    tracing::info!(
        "oversized push dropped {} oldest bytes of {}",
        ring.overflow_count()?,
        oversized.len()
    );
    print!("{}", drain_to_string(&mut ring)?);
    ring.clear_overflow_count()?;

    // Same overflow, strict policy: pushes are refused instead of
    // overwriting, and the overflow counter stays untouched.
    ring.init(8)?;
    let mut accepted = 0;
    for &byte in oversized {
        match ring.try_push(byte) {
            Ok(()) => accepted += 1,
            Err(RingError::Full) => break,
            Err(err) => return Err(err),
        }
    }
    tracing::info!(
        "strict push accepted {} of {} bytes, overflow count {}",
        accepted,
        oversized.len(),
        ring.overflow_count()?
    );
    println!("{}", drain_to_string(&mut ring)?);

    // A static ring: starts out uninitialized and refuses everything,
    // works after one init call, then relays bytes between threads with
    // the mutex held only per operation.
    match RELAY.lock().try_push(0) {
        Err(RingError::InvalidState) => {
            tracing::info!("static ring refused a push before init, as it should")
        }
        other => tracing::warn!("static ring accepted a push before init: {:?}", other),
    }
    RELAY.lock().init(RELAY_CAPACITY)?;

    let producer = thread::spawn(|| -> RingResult {
        for &byte in RELAY_MESSAGE {
            loop {
                // Bind first so the lock is released before any yield.
                let pushed = RELAY.lock().try_push(byte);
                match pushed {
                    Ok(()) => break,
                    Err(RingError::Full) => thread::yield_now(),
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(())
    });

    let mut received = String::new();
    let mut chunk = [0u8; 16];
    while received.len() < RELAY_MESSAGE.len() {
        let n = RELAY.lock().drain_into(&mut chunk)?;
        if n == 0 {
            thread::yield_now();
            continue;
        }
        received.push_str(&String::from_utf8_lossy(&chunk[..n]));
    }
    producer.join().expect("producer thread panicked")?;
    tracing::info!("relayed {} bytes across threads", received.len());
    print!("{received}");

    Ok(())
}
