//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::{Mutex, MutexGuard, PoisonError};
use stipulate::{Args, ErrorFactory, TierSnapshot};

// ============================================================================
// TIER ISOLATION
// ============================================================================

/// Tier flags are process-wide and the harness runs tests on many threads.
static TIER_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the runtime tiers; restores them on drop.
pub struct TierScope {
    snapshot: TierSnapshot,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for TierScope {
    fn drop(&mut self) {
        self.snapshot.restore();
    }
}

/// Take the tier lock. Hold the returned scope for the whole test.
pub fn tier_scope() -> TierScope {
    let lock = TIER_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    TierScope {
        snapshot: TierSnapshot::capture(),
        _lock: lock,
    }
}

// ============================================================================
// INSTRUMENTED PREDICATES
// ============================================================================

/// Predicate that counts its calls and always answers `answer`.
pub fn counting<T: ?Sized>(calls: &Cell<usize>, answer: bool) -> impl Fn(&T) -> bool + '_ {
    move |_: &T| {
        calls.set(calls.get() + 1);
        answer
    }
}

pub fn is_even(v: &i32) -> bool {
    v % 2 == 0
}

// ============================================================================
// SAMPLE ERROR TYPES
// ============================================================================

/// Single-string constructor.
#[derive(Debug, PartialEq)]
pub struct MyError(pub String);

impl ErrorFactory for MyError {
    fn from_args(args: &Args) -> Option<Self> {
        if args.len() != 1 {
            return None;
        }
        args.take(0).map(MyError)
    }

    fn from_message(message: &str) -> Option<Self> {
        Some(MyError(message.to_owned()))
    }
}

/// Two-argument constructor only.
#[derive(Debug, PartialEq)]
pub struct HttpError {
    pub status: u16,
    pub reason: String,
}

impl ErrorFactory for HttpError {
    fn from_args(args: &Args) -> Option<Self> {
        if args.len() != 2 {
            return None;
        }
        Some(HttpError {
            status: args.take(0)?,
            reason: args.take(1)?,
        })
    }
}

/// Offers no construction path at all.
#[derive(Debug, PartialEq)]
pub struct Opaque;

impl ErrorFactory for Opaque {}
