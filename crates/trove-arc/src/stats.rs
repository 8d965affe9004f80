//! Stats Module - Runtime Counters
//!
//! Collects per-thread operation counters for:
//! - Leak hunting (`live_objects` should return to zero)
//! - Test observability
//! - Production monitoring
//!
//! Counters are plain `Cell`s: the runtime is single-threaded by contract,
//! so each thread observes only its own traffic.

use std::cell::Cell;

use serde::Serialize;

#[derive(Default)]
struct Counters {
    objects_created: Cell<u64>,
    objects_destroyed: Cell<u64>,
    retains: Cell<u64>,
    releases: Cell<u64>,
    autoreleases: Cell<u64>,
    pools_pushed: Cell<u64>,
    pools_popped: Cell<u64>,
    dropped_registrations: Cell<u64>,
}

thread_local! {
    static COUNTERS: Counters = Counters::default();
}

fn bump(field: fn(&Counters) -> &Cell<u64>) {
    COUNTERS.with(|counters| {
        let cell = field(counters);
        cell.set(cell.get() + 1);
    });
}

pub(crate) fn record_created() {
    bump(|c| &c.objects_created);
}

pub(crate) fn record_destroyed() {
    bump(|c| &c.objects_destroyed);
}

pub(crate) fn record_retain() {
    bump(|c| &c.retains);
}

pub(crate) fn record_release() {
    bump(|c| &c.releases);
}

pub(crate) fn record_autorelease() {
    bump(|c| &c.autoreleases);
}

pub(crate) fn record_pool_pushed() {
    bump(|c| &c.pools_pushed);
}

pub(crate) fn record_pool_popped() {
    bump(|c| &c.pools_popped);
}

pub(crate) fn record_dropped_registration() {
    bump(|c| &c.dropped_registrations);
}

/// Snapshot of the current thread's runtime counters
///
/// # Examples
///
/// ```rust
/// use trove_arc::{release, stats, TroveString};
///
/// let obj = TroveString::create("counted");
/// release(Some(obj));
///
/// let snapshot = stats();
/// assert!(snapshot.objects_destroyed >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArcStats {
    /// Objects constructed (each starts with count 1)
    pub objects_created: u64,
    /// Destructors that have run
    pub objects_destroyed: u64,
    /// Retain operations
    pub retains: u64,
    /// Release operations (drains included)
    pub releases: u64,
    /// Successful pool registrations
    pub autoreleases: u64,
    /// Pools pushed
    pub pools_pushed: u64,
    /// Pools popped and drained
    pub pools_popped: u64,
    /// Registrations dropped because no pool was current
    pub dropped_registrations: u64,
}

impl ArcStats {
    /// Objects constructed but not yet destroyed
    pub fn live_objects(&self) -> u64 {
        self.objects_created.saturating_sub(self.objects_destroyed)
    }
}

/// Take a snapshot of the current thread's counters
pub fn stats() -> ArcStats {
    COUNTERS.with(|c| ArcStats {
        objects_created: c.objects_created.get(),
        objects_destroyed: c.objects_destroyed.get(),
        retains: c.retains.get(),
        releases: c.releases.get(),
        autoreleases: c.autoreleases.get(),
        pools_pushed: c.pools_pushed.get(),
        pools_popped: c.pools_popped.get(),
        dropped_registrations: c.dropped_registrations.get(),
    })
}

/// Reset the current thread's counters to zero
pub fn reset_stats() {
    COUNTERS.with(|c| {
        c.objects_created.set(0);
        c.objects_destroyed.set(0);
        c.retains.set(0);
        c.releases.set(0);
        c.autoreleases.set(0);
        c.pools_pushed.set(0);
        c.pools_popped.set(0);
        c.dropped_registrations.set(0);
    });
}
