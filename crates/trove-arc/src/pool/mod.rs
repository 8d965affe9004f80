//! Pool Module - Deferred-release pools
//!
//! An autorelease pool collects handles whose release is deferred until
//! the pool drains. Pools live on a per-thread stack (see [`context`]);
//! the innermost pool receives registrations, and popping a pool drains
//! it and restores the one beneath.

pub mod context;
pub mod scope;

pub use context::{pool_depth, pool_pop, pool_push};
pub use scope::{with_pool, PoolGuard};

use crate::object::ObjRef;

/// A collection of deferred releases
///
/// Entries keep insertion order and may repeat: each registration produces
/// exactly one release at drain time. A pool is fully consumed by its
/// drain and never reused.
pub struct AutoreleasePool {
    entries: Vec<ObjRef>,
}

impl AutoreleasePool {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an object to the pool
    ///
    /// The backing storage doubles when full, so registration stays
    /// amortized constant time.
    pub(crate) fn register(&mut self, obj: ObjRef) {
        if self.entries.len() == self.entries.capacity() {
            self.entries.reserve(self.entries.capacity().max(1));
        }
        self.entries.push(obj);
    }

    /// Release every entry in insertion order, consuming the pool
    ///
    /// First-registered objects are released first. Entries with no
    /// interdependency release safely in any order; insertion order is
    /// kept for determinism.
    pub(crate) fn drain(self) {
        for obj in self.entries {
            crate::arc::release(Some(obj));
        }
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entry capacity of the backing storage
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}
