//! Error Module - Trove ARC Error Types
//!
//! Defines all error types used by the runtime.
//!
//! Two classes of failure exist:
//!
//! - Recoverable, reported conditions are returned as [`TroveError`] values
//!   (or logged by the tolerant entry points that swallow them).
//! - Allocation failure for a pool or its backing storage is not an error
//!   value. The global allocator aborts the process, and the runtime makes
//!   no attempt to recover from its own infrastructure failing.

use thiserror::Error;

/// Main error type for all Trove ARC operations
///
/// # Examples
///
/// ```rust
/// use trove_arc::TroveError;
///
/// fn handle_error(err: TroveError) {
///     match err {
///         TroveError::NoActivePool => {
///             eprintln!("autorelease called outside a pool scope");
///         }
///         other => {
///             eprintln!("runtime error: {}", other);
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum TroveError {
    /// Configuration error
    ///
    /// **When returned:** A [`TroveConfig`](crate::TroveConfig) fails
    /// validation, e.g. a zero pool capacity.
    ///
    /// **Recovery strategy:** Fall back to the default configuration or fix
    /// the offending field.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No autorelease pool is active on this thread
    ///
    /// **When returned:** A registration arrives while the pool stack is
    /// empty. The object is not released; it stays alive and becomes the
    /// caller's responsibility.
    ///
    /// **Recovery strategy:** Push a pool (or enter a
    /// [`with_pool`](crate::with_pool) scope) before autoreleasing.
    #[error("No autorelease pool is active on this thread")]
    NoActivePool,
}

impl TroveError {
    /// Check if this error is the caller's to fix rather than a runtime bug
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            TroveError::NoActivePool | TroveError::Configuration(_)
        )
    }
}

/// Result type alias for Trove ARC operations
pub type Result<T> = std::result::Result<T, TroveError>;
