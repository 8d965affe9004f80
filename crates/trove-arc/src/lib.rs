//! # Trove ARC - Manual Reference Counting with Autorelease Pools
//!
//! Trove ARC is an explicit, non-compiler-assisted reference-counting
//! runtime modeled on Objective-C/Swift ARC. Programs create heap objects,
//! share them across call sites without hand-tracked frees, and have them
//! reclaimed either immediately when the owning count drops to zero or
//! deferred until a pool scope closes.
//!
//! ## Overview
//!
//! - **Managed objects**: any `'static` type implementing [`Managed`].
//!   Its `Drop` impl is the destructor, invoked exactly once when the
//!   reference count reaches zero.
//! - **Handles**: [`Ref<T>`] is a `Copy` handle that declares no ownership
//!   by itself; ownership is the count, moved explicitly with [`retain`]
//!   and [`release`].
//! - **Autorelease pools**: [`autorelease`] defers a release to the
//!   current pool's drain. Pools nest on a per-thread stack; popping a
//!   pool drains it in insertion order and restores the enclosing pool.
//! - **Scoped blocks**: [`with_pool`] and [`PoolGuard`] pair push and pop
//!   around a region and drain on every exit path, unwinding included.
//!
//! ## Quick Start
//!
//! ```rust
//! use trove_arc::{autorelease, with_pool, TroveString};
//!
//! with_pool(|| {
//!     let greeting = autorelease(TroveString::create("Hello, Trove ARC!"));
//!     println!("{}", greeting.get().text());
//!     // No manual release needed; the pool drains when the scope ends.
//! });
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Caller                          │
//! │   create ──► retain/release ──► autorelease          │
//! └───────────────┬──────────────────────┬───────────────┘
//!                 │                      │
//!                 ▼                      ▼
//!        ┌─────────────────┐    ┌─────────────────────┐
//!        │  Count engine   │    │  Pool context       │
//!        │  (arc module)   │◄───│  per-thread stack   │
//!        │  destroy at 0   │    │  of pools; drain on │
//!        └─────────────────┘    │  pop, LIFO nesting  │
//!                               └─────────────────────┘
//! ```
//!
//! ## Ownership Rules
//!
//! 1. **Construction is +1**: one `release` (direct or via drain) must
//!    consume it.
//! 2. **Pair every retain with a release**: the runtime does not detect
//!    over-release; a dangling handle must not be used.
//! 3. **Autorelease transfers the caller's count to the pool**: retain
//!    first if you also want to release manually before the drain.
//! 4. **One thread**: handles and guards are `!Send`; counts are plain
//!    cells and the pool stack is thread-local.
//!
//! ## Error Handling
//!
//! Registering with no pool current is reported and dropped (the object
//! leaks rather than crashing; see [`TroveError::NoActivePool`]).
//! Allocation failure for a pool or its storage aborts the process; the
//! runtime does not try to recover from its own infrastructure failing.
//!
//! ## Modules
//!
//! - [`arc`]: retain/release/autorelease engine
//! - [`config`]: runtime tuning parameters
//! - [`error`]: error types
//! - [`logging`]: structured runtime events
//! - [`object`]: object model (header, handles, managed string)
//! - [`pool`]: autorelease pools, the per-thread stack, scoped blocks
//! - [`stats`]: per-thread operation counters

// Core engine
pub mod arc;
pub mod config;
pub mod error;

// Object model and pools
pub mod object;
pub mod pool;

// Monitoring
pub mod logging;
pub mod stats;

// Re-export main types for convenience
pub use arc::{autorelease, release, retain, try_autorelease};
pub use config::TroveConfig;
pub use error::{Result, TroveError};
pub use logging::{set_log_style, ArcEvent, LogStyle};
pub use object::{IntoObjRef, Managed, ObjRef, Ref, TroveString};
pub use pool::{pool_depth, pool_pop, pool_push, with_pool, PoolGuard};
pub use stats::{reset_stats, stats, ArcStats};

/// Crate version string from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the runtime with the default configuration
///
/// Optional: every operation works without it. Calling it resets the
/// current thread to defaults.
///
/// # Examples
///
/// ```rust
/// trove_arc::init()?;
/// # Ok::<(), trove_arc::TroveError>(())
/// ```
pub fn init() -> Result<()> {
    init_with_config(TroveConfig::default())
}

/// Initialize the runtime with a custom configuration
///
/// Applies to the current thread: pools pushed afterwards use the
/// configured capacity, and the verbose flag adjusts event log levels.
///
/// # Errors
/// Returns `Configuration` if the configuration fails validation; the
/// previous configuration stays installed.
///
/// # Examples
///
/// ```rust
/// use trove_arc::TroveConfig;
///
/// let config = TroveConfig {
///     initial_pool_capacity: 64,
///     ..Default::default()
/// };
/// trove_arc::init_with_config(config)?;
/// # Ok::<(), trove_arc::TroveError>(())
/// ```
pub fn init_with_config(config: TroveConfig) -> Result<()> {
    config.validate()?;
    let style = logging::log_style();
    logging::set_log_style(LogStyle {
        verbose: config.verbose,
        ..style
    });
    pool::context::install_config(config);
    Ok(())
}
