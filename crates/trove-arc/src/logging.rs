//! Logging and Tracing
//!
//! Structured events for runtime operations, useful for:
//! - Leak hunting (pair created/destroyed counts)
//! - Debugging pool scopes
//! - Production monitoring
//!
//! Log Levels:
//! - ERROR: dropped registrations
//! - DEBUG: pool lifecycle
//! - TRACE: per-object operations (promoted to DEBUG in verbose mode)
//!
//! Events go through the `log` facade under the `trove_arc` target, so the
//! host application's logger controls filtering and output. Rendering is
//! human-readable by default; JSON can be selected per thread with
//! [`set_log_style`].

use std::cell::Cell;
use std::fmt;

use log::Level;
use serde::Serialize;

/// Runtime event types
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ArcEvent {
    /// An object was constructed with an initial count of one
    ObjectCreated { kind: &'static str },

    /// An object's count reached zero and its destructor ran
    ObjectDestroyed { kind: &'static str },

    /// Reference count incremented
    Retained { kind: &'static str, count: u32 },

    /// Reference count decremented
    Released { kind: &'static str, count: u32 },

    /// A pool was pushed and became current
    PoolPushed { depth: usize, capacity: usize },

    /// A pool was popped and drained
    PoolPopped { depth: usize, drained: usize },

    /// A registration arrived with no pool current; the object leaks
    RegistrationDropped { kind: &'static str },
}

impl fmt::Display for ArcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcEvent::ObjectCreated { kind } => {
                write!(f, "created {} (count 1)", kind)
            }
            ArcEvent::ObjectDestroyed { kind } => {
                write!(f, "destroyed {}", kind)
            }
            ArcEvent::Retained { kind, count } => {
                write!(f, "retained {} (count {})", kind, count)
            }
            ArcEvent::Released { kind, count } => {
                write!(f, "released {} (count {})", kind, count)
            }
            ArcEvent::PoolPushed { depth, capacity } => {
                write!(f, "pool pushed (depth {}, capacity {})", depth, capacity)
            }
            ArcEvent::PoolPopped { depth, drained } => {
                write!(f, "pool popped (drained {}, depth {})", drained, depth)
            }
            ArcEvent::RegistrationDropped { kind } => {
                write!(
                    f,
                    "no autorelease pool in place, dropping {} registration",
                    kind
                )
            }
        }
    }
}

/// Per-thread rendering style for runtime events
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStyle {
    /// Render events as single-line JSON instead of human-readable text
    pub json: bool,

    /// Promote per-object events from TRACE to DEBUG
    pub verbose: bool,
}

thread_local! {
    static STYLE: Cell<LogStyle> = const {
        Cell::new(LogStyle {
            json: false,
            verbose: false,
        })
    };
}

/// Set the event rendering style for the current thread
pub fn set_log_style(style: LogStyle) {
    STYLE.with(|s| s.set(style));
}

/// Get the current thread's event rendering style
pub fn log_style() -> LogStyle {
    STYLE.with(|s| s.get())
}

/// Log level an event is emitted at
pub fn event_level(event: &ArcEvent) -> Level {
    match event {
        ArcEvent::RegistrationDropped { .. } => Level::Error,
        ArcEvent::PoolPushed { .. } | ArcEvent::PoolPopped { .. } => Level::Debug,
        ArcEvent::ObjectCreated { .. }
        | ArcEvent::ObjectDestroyed { .. }
        | ArcEvent::Retained { .. }
        | ArcEvent::Released { .. } => {
            if log_style().verbose {
                Level::Debug
            } else {
                Level::Trace
            }
        }
    }
}

/// Emit an event through the `log` facade
pub(crate) fn emit(event: &ArcEvent) {
    let level = event_level(event);
    if !log::log_enabled!(target: "trove_arc", level) {
        return;
    }

    if log_style().json {
        if let Ok(json) = serde_json::to_string(event) {
            log::log!(target: "trove_arc", level, "{}", json);
            return;
        }
        // Fall through to the human rendering if serialization fails.
    }

    log::log!(target: "trove_arc", level, "{}", event);
}
