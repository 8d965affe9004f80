//! Managed handles
//!
//! Design: a `Copy` handle over a heap cell that pairs the reference-count
//! header with the value. Destruction is virtual dispatch through the
//! `dyn Managed` vtable, so a type's destructor is simply its `Drop` impl;
//! no function pointers are stored and no layout casting happens anywhere.
//!
//! Handles behave like raw object pointers in a manual ARC system:
//! copying one does not retain, dropping one does not release. The count
//! moves only through the engine in [`crate::arc`].

use std::ptr::NonNull;

use crate::logging::{self, ArcEvent};
use crate::object::header::Header;
use crate::stats;

/// Capability every ARC-managed type provides
///
/// The only requirement is droppability: a type's `Drop` impl is its
/// destructor, invoked exactly once when the reference count reaches zero.
/// A destructor that owns other managed objects must release them there
/// (see [`release`](crate::release)); the object's own storage is freed
/// after the destructor returns.
pub trait Managed: 'static {
    /// Short type tag used in log events
    fn kind(&self) -> &'static str {
        "object"
    }
}

/// Heap cell pairing the header with the managed value
pub(crate) struct ArcCell<T: Managed + ?Sized> {
    pub(crate) header: Header,
    pub(crate) value: T,
}

/// Handle to an ARC-managed object
///
/// `Ref` is `Copy`: it declares no ownership by itself. Ownership is the
/// count, moved explicitly with [`retain`](crate::retain) /
/// [`release`](crate::release). A handle whose object has been destroyed
/// is dangling; using it is a caller error the runtime cannot detect.
///
/// Handles are `!Send` and `!Sync`, which pins the whole system to one
/// thread at compile time.
pub struct Ref<T: Managed + ?Sized> {
    cell: NonNull<ArcCell<T>>,
}

/// Type-erased handle, the form pools store
pub type ObjRef = Ref<dyn Managed>;

impl<T: Managed + ?Sized> Clone for Ref<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Managed + ?Sized> Copy for Ref<T> {}

impl<T: Managed> Ref<T> {
    /// Allocate a managed object with a reference count of one
    ///
    /// The caller owns the initial count and must consume it with one
    /// `release`, directly or through a pool drain.
    pub fn new(value: T) -> Self {
        let cell = NonNull::from(Box::leak(Box::new(ArcCell {
            header: Header::new(),
            value,
        })));
        let obj = Self { cell };
        stats::record_created();
        logging::emit(&ArcEvent::ObjectCreated {
            kind: obj.get().kind(),
        });
        obj
    }

    /// Erase the concrete type, keeping the destructor reachable through
    /// the vtable
    pub fn erase(self) -> ObjRef {
        let cell: *mut ArcCell<dyn Managed> = self.cell.as_ptr();
        // SAFETY: unsizing does not change the address, so the pointer
        // stays non-null.
        Ref {
            cell: unsafe { NonNull::new_unchecked(cell) },
        }
    }
}

impl<T: Managed + ?Sized> Ref<T> {
    /// Borrow the managed value
    ///
    /// The handle does not own the borrow. The caller must hold a
    /// reference (count above zero) for as long as the returned borrow is
    /// used; borrowing through a dangling handle is a caller error.
    pub fn get(&self) -> &T {
        // SAFETY: the cell is live while the count is positive, which is
        // the caller's contract for every handle dereference.
        unsafe { &self.cell.as_ref().value }
    }

    /// Current reference count
    pub fn count(self) -> u32 {
        self.header().count()
    }

    pub(crate) fn header(&self) -> &Header {
        // SAFETY: same liveness contract as `get`.
        unsafe { &self.cell.as_ref().header }
    }

    pub(crate) fn into_cell_ptr(self) -> *mut ArcCell<T> {
        self.cell.as_ptr()
    }
}

/// Conversion into the type-erased handle registered with pools
///
/// Implemented for every typed handle and for [`ObjRef`] itself, so
/// [`autorelease`](crate::autorelease) accepts either and hands back the
/// same handle for chaining.
pub trait IntoObjRef: Copy {
    fn into_obj_ref(self) -> ObjRef;
}

impl<T: Managed> IntoObjRef for Ref<T> {
    fn into_obj_ref(self) -> ObjRef {
        self.erase()
    }
}

impl IntoObjRef for ObjRef {
    fn into_obj_ref(self) -> ObjRef {
        self
    }
}
