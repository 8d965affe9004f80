//! Pool Context - the per-thread pool stack
//!
//! One stack of pools per thread; the innermost pool is current and
//! receives registrations. Pushing preserves the enclosing pool and
//! popping restores it, so nesting can never strand a pool.
//!
//! The stack lives in a `thread_local` `RefCell`. Every borrow here is
//! short and never spans user code: a pool is detached from the stack
//! before it drains, so destructors are free to push pools, register into
//! the enclosing pool, or release other objects while the drain runs.

use std::cell::RefCell;

use crate::config::TroveConfig;
use crate::error::{Result, TroveError};
use crate::logging::{self, ArcEvent};
use crate::object::ObjRef;
use crate::pool::AutoreleasePool;
use crate::stats;

thread_local! {
    static CONTEXT: RefCell<PoolContext> = RefCell::new(PoolContext::new());
}

struct PoolContext {
    stack: Vec<AutoreleasePool>,
    config: TroveConfig,
}

impl PoolContext {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            config: TroveConfig::default(),
        }
    }
}

/// Push a new pool and make it current
///
/// The pool starts at the configured capacity. The previously current
/// pool stays on the stack beneath it and becomes current again when the
/// new pool is popped.
pub fn pool_push() {
    let (depth, capacity) = CONTEXT.with(|ctx| {
        let mut ctx = ctx.borrow_mut();
        let capacity = ctx.config.initial_pool_capacity;
        ctx.stack.push(AutoreleasePool::with_capacity(capacity));
        (ctx.stack.len(), capacity)
    });
    stats::record_pool_pushed();
    logging::emit(&ArcEvent::PoolPushed { depth, capacity });
}

/// Pop the current pool, draining it
///
/// Releases every entry in insertion order, discards the pool, and
/// restores the enclosing pool as current. No-op if no pool is current.
pub fn pool_pop() {
    let Some(pool) = CONTEXT.with(|ctx| ctx.borrow_mut().stack.pop()) else {
        return;
    };
    stats::record_pool_popped();
    logging::emit(&ArcEvent::PoolPopped {
        depth: pool_depth(),
        drained: pool.len(),
    });
    // Detached from the stack above, so re-entrant registrations from
    // destructors target the enclosing pool, not this one.
    pool.drain();
}

/// Nesting depth of the current thread's pool stack
pub fn pool_depth() -> usize {
    CONTEXT.with(|ctx| ctx.borrow().stack.len())
}

/// Append an object to the current pool
pub(crate) fn register(obj: ObjRef) -> Result<()> {
    CONTEXT.with(|ctx| {
        let mut ctx = ctx.borrow_mut();
        match ctx.stack.last_mut() {
            Some(pool) => {
                pool.register(obj);
                Ok(())
            }
            None => Err(TroveError::NoActivePool),
        }
    })
}

/// Install the configuration pools on this thread are created from
pub(crate) fn install_config(config: TroveConfig) {
    CONTEXT.with(|ctx| ctx.borrow_mut().config = config);
}

pub(crate) fn warn_on_missing_pool() -> bool {
    CONTEXT.with(|ctx| ctx.borrow().config.warn_on_missing_pool)
}
