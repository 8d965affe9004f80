//! Scoped Block Tests
//!
//! The scoped construct guarantees drain-on-exit on every path out of the
//! region: fall-through, early return, and unwinding panics. These tests
//! also cover the end-to-end autorelease scenario.

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::{drop_counter, DropCounter, Probe};
use trove_arc::{
    autorelease, pool_depth, reset_stats, stats, with_pool, PoolGuard, TroveString,
};

/// Test the full create/autorelease/drain round trip
///
/// **Bug this finds:** Anything in the common path; the object must be
/// readable inside the scope and destroyed exactly once after it
#[test]
fn autoreleased_string_lives_for_the_scope() {
    reset_stats();

    with_pool(|| {
        let greeting = autorelease(TroveString::create("Hello, Trove ARC!"));
        assert_eq!(greeting.get().text(), "Hello, Trove ARC!");
        assert_eq!(greeting.count(), 1);
    });

    let snapshot = stats();
    assert_eq!(snapshot.objects_created, 1);
    assert_eq!(snapshot.objects_destroyed, 1);
    assert_eq!(snapshot.autoreleases, 1);
    assert_eq!(snapshot.live_objects(), 0);
    assert_eq!(pool_depth(), 0);
}

/// Test that the body's value is returned
#[test]
fn with_pool_returns_the_body_value() {
    let length = with_pool(|| {
        let s = autorelease(TroveString::create("scoped"));
        s.get().len()
    });
    assert_eq!(length, 6);
}

/// Test drain on early return
///
/// **Bug this finds:** Pool left behind by a non-local exit
#[test]
fn early_return_still_drains() {
    fn scoped(drops: &DropCounter) -> u32 {
        let _pool = PoolGuard::new();
        autorelease(Probe::create(drops));
        if drops.get() == 0 {
            return 7;
        }
        0
    }

    let drops = drop_counter();
    assert_eq!(scoped(&drops), 7);
    assert_eq!(drops.get(), 1);
    assert_eq!(pool_depth(), 0);
}

/// Test drain on panic unwind
///
/// **Bug this finds:** Pool and registrations leaked across unwinding
#[test]
fn panic_still_drains() {
    let drops = drop_counter();

    let result = catch_unwind(AssertUnwindSafe(|| {
        with_pool(|| {
            autorelease(Probe::create(&drops));
            panic!("scoped panic");
        })
    }));

    assert!(result.is_err());
    assert_eq!(drops.get(), 1, "guard must drain during unwind");
    assert_eq!(pool_depth(), 0);
}

/// Test that scopes compose with manual retains across the boundary
///
/// **Bug this finds:** Drain consuming counts it does not own
#[test]
fn retained_object_outlives_the_scope() {
    let drops = drop_counter();

    let kept = with_pool(|| {
        let obj = autorelease(Probe::create(&drops));
        trove_arc::retain(Some(obj)); // carry one count out of the scope
        obj
    });

    assert_eq!(drops.get(), 0);
    assert_eq!(kept.count(), 1);
    trove_arc::release(Some(kept));
    assert_eq!(drops.get(), 1);
}

/// Test the stats snapshot shape consumed by monitoring
#[test]
fn stats_snapshot_serializes() {
    reset_stats();
    with_pool(|| {
        autorelease(TroveString::create("counted"));
    });

    let json = serde_json::to_value(stats()).expect("snapshot must serialize");
    assert_eq!(json["objects_created"], 1);
    assert_eq!(json["pools_popped"], 1);
}
