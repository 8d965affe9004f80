//! Managed string type
//!
//! The canonical managed object: shows the collaborator contract every
//! ARC type follows. The owned `String` is the resource; its `Drop` is the
//! destructor, and the cell's storage is freed after it runs.

use crate::object::{Managed, Ref};

/// String managed by the ARC runtime
///
/// # Examples
///
/// ```rust
/// use trove_arc::{release, TroveString};
///
/// let greeting = TroveString::create("Hello, Trove ARC!");
/// assert_eq!(greeting.get().text(), "Hello, Trove ARC!");
/// release(Some(greeting));
/// ```
pub struct TroveString {
    text: String,
}

impl TroveString {
    /// Allocate a managed string with a reference count of one
    pub fn create(init: &str) -> Ref<TroveString> {
        Ref::new(Self {
            text: init.to_owned(),
        })
    }

    /// The string contents
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Managed for TroveString {
    fn kind(&self) -> &'static str {
        "string"
    }
}
