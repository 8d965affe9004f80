//! Configuration Module - Runtime Tuning Parameters
//!
//! Manages the parameters that shape pool behavior and reporting.
//! All parameters have sensible defaults.

use crate::error::{Result, TroveError};

/// Starting entry capacity for a freshly pushed autorelease pool
pub const DEFAULT_POOL_CAPACITY: usize = 16;

/// Main configuration for the Trove ARC runtime
///
/// Installed per thread with [`init_with_config`](crate::init_with_config);
/// pools pushed afterwards pick it up.
///
/// # Examples
///
/// ```rust
/// use trove_arc::TroveConfig;
///
/// // Use default configuration
/// let config = TroveConfig::default();
///
/// // Custom configuration for registration-heavy scopes
/// let config = TroveConfig {
///     initial_pool_capacity: 256,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TroveConfig {
    /// Entry capacity a new pool starts with
    ///
    /// The backing storage doubles whenever it fills, so this only sets
    /// the point where growth begins.
    ///
    /// Default: 16
    pub initial_pool_capacity: usize,

    /// Report registrations that arrive with no pool in place
    ///
    /// The registration is dropped either way; the object stays alive and
    /// releasing it becomes the caller's responsibility.
    ///
    /// Default: true
    pub warn_on_missing_pool: bool,

    /// Log per-object retain/release traffic at DEBUG instead of TRACE
    ///
    /// Default: false
    pub verbose: bool,
}

impl Default for TroveConfig {
    fn default() -> Self {
        Self {
            initial_pool_capacity: DEFAULT_POOL_CAPACITY,
            warn_on_missing_pool: true,
            verbose: false,
        }
    }
}

impl TroveConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    /// Returns `Configuration` if any field is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.initial_pool_capacity == 0 {
            return Err(TroveError::Configuration(
                "initial_pool_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
