//! Pool Nesting Tests
//!
//! The pool context is a true stack: pushing preserves the enclosing pool
//! and popping restores it. These tests pin that guarantee; losing the
//! outer pool on nested pushes would silently leak it along with every
//! object registered in it.

mod common;

use common::{drop_counter, drop_order, OrderedProbe, Probe};
use trove_arc::{autorelease, pool_depth, pool_pop, pool_push, PoolGuard};

/// Test that popping an inner pool restores the outer one
///
/// **Bug this finds:** Outer pool stranded after nested push/pop
#[test]
fn popping_inner_pool_restores_outer() {
    let drops = drop_counter();

    pool_push(); // outer
    pool_push(); // inner
    assert_eq!(pool_depth(), 2);

    pool_pop();
    assert_eq!(pool_depth(), 1);

    // Must land in the restored outer pool, not vanish
    autorelease(Probe::create(&drops));
    assert_eq!(drops.get(), 0);

    pool_pop();
    assert_eq!(drops.get(), 1);
}

/// Test that each pool drains only its own registrations
///
/// **Bug this finds:** Inner drains leaking into or stealing from outer pools
#[test]
fn nested_pools_drain_their_own_registrations() {
    let order = drop_order();

    pool_push();
    autorelease(OrderedProbe::create(&order, 1));

    pool_push();
    autorelease(OrderedProbe::create(&order, 2));
    pool_pop();
    assert_eq!(*order.borrow(), vec![2], "inner pool drains only its own");

    autorelease(OrderedProbe::create(&order, 3));
    pool_pop();

    assert_eq!(*order.borrow(), vec![2, 1, 3]);
}

/// Test guard-based nesting
///
/// **Bug this finds:** Guard drop order breaking LIFO nesting
#[test]
fn guards_nest_lifo() {
    let drops = drop_counter();

    {
        let _outer = PoolGuard::new();
        autorelease(Probe::create(&drops));
        {
            let _inner = PoolGuard::new();
            autorelease(Probe::create(&drops));
            assert_eq!(pool_depth(), 2);
        }
        assert_eq!(drops.get(), 1);
        assert_eq!(pool_depth(), 1);
    }

    assert_eq!(drops.get(), 2);
    assert_eq!(pool_depth(), 0);
}

/// Test deep nesting with one registration per level
///
/// **Bug this finds:** Stack handling drift at depth
#[test]
fn deep_nesting_unwinds_level_by_level() {
    let drops = drop_counter();
    const DEPTH: usize = 8;

    for _ in 0..DEPTH {
        pool_push();
        autorelease(Probe::create(&drops));
    }
    assert_eq!(pool_depth(), DEPTH);

    for level in (0..DEPTH).rev() {
        pool_pop();
        assert_eq!(pool_depth(), level);
        assert_eq!(drops.get() as usize, DEPTH - level);
    }
}
