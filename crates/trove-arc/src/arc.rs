//! Reference-Count Engine
//!
//! The retain/release protocol over managed handles.
//!
//! Ownership contract:
//! - Construction hands the caller a count of one; one `release` consumes
//!   it, directly or through a pool drain.
//! - Every `retain` pairs with exactly one later `release`.
//! - `autorelease` transfers the caller's count to the current pool. A
//!   caller that wants to keep releasing manually after autoreleasing must
//!   retain first, or the drain will over-release.
//! - Releasing more times than the object was retained is a caller error
//!   the engine does not detect (a debug assertion catches the underflow
//!   in test builds).

use crate::error::Result;
use crate::logging::{self, ArcEvent};
use crate::object::{IntoObjRef, Managed, Ref};
use crate::pool::context;
use crate::stats;

/// Increment an object's reference count, declaring a new owner
///
/// Tolerant no-op on `None`.
///
/// # Examples
///
/// ```rust
/// use trove_arc::{release, retain, TroveString};
///
/// let obj = TroveString::create("shared");
/// retain(Some(obj));
/// assert_eq!(obj.count(), 2);
/// release(Some(obj));
/// release(Some(obj));
/// ```
pub fn retain<T: Managed + ?Sized>(obj: Option<Ref<T>>) {
    let Some(obj) = obj else { return };
    let count = obj.header().increment();
    stats::record_retain();
    logging::emit(&ArcEvent::Retained {
        kind: obj.get().kind(),
        count,
    });
}

/// Decrement an object's reference count, destroying it at zero
///
/// When the count reaches zero the object's destructor runs exactly once
/// and its storage is freed; every handle to it is dangling afterwards.
/// Tolerant no-op on `None`.
pub fn release<T: Managed + ?Sized>(obj: Option<Ref<T>>) {
    let Some(obj) = obj else { return };
    let count = obj.header().decrement();
    stats::record_release();
    logging::emit(&ArcEvent::Released {
        kind: obj.get().kind(),
        count,
    });
    if count == 0 {
        destroy(obj);
    }
}

#[cold]
fn destroy<T: Managed + ?Sized>(obj: Ref<T>) {
    logging::emit(&ArcEvent::ObjectDestroyed {
        kind: obj.get().kind(),
    });
    stats::record_destroyed();
    // SAFETY: the count just reached zero, so this is the last reference
    // and ownership of the cell reverts here. The destructor may re-enter
    // the engine (releasing children, autoreleasing into an enclosing
    // pool); no borrow or lock is held across it.
    unsafe { drop(Box::from_raw(obj.into_cell_ptr())) };
}

/// Register an object with the current pool, deferring one release to the
/// pool's drain
///
/// Returns the same handle for chaining. If no pool is current the
/// registration is reported and dropped: the object is not released and
/// stays the caller's responsibility. That is a deliberate leak, not a
/// crash.
///
/// # Examples
///
/// ```rust
/// use trove_arc::{autorelease, with_pool, TroveString};
///
/// with_pool(|| {
///     let greeting = autorelease(TroveString::create("Hello, Trove ARC!"));
///     assert_eq!(greeting.get().text(), "Hello, Trove ARC!");
/// });
/// // Drained: the string has been released and destroyed.
/// ```
pub fn autorelease<R: IntoObjRef>(obj: R) -> R {
    if try_autorelease(obj).is_err() {
        stats::record_dropped_registration();
        if context::warn_on_missing_pool() {
            logging::emit(&ArcEvent::RegistrationDropped {
                kind: obj.into_obj_ref().get().kind(),
            });
        }
    }
    obj
}

/// Fallible form of [`autorelease`]
///
/// # Errors
/// Returns `NoActivePool` if the current thread's pool stack is empty;
/// nothing is registered and the count is untouched.
pub fn try_autorelease<R: IntoObjRef>(obj: R) -> Result<R> {
    context::register(obj.into_obj_ref())?;
    stats::record_autorelease();
    Ok(obj)
}
