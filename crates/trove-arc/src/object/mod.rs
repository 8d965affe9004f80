//! Object Module - ARC-managed object model
//!
//! This module defines the structure of objects managed by the runtime.

pub mod handle;
pub mod header;
pub mod string;

pub use handle::{IntoObjRef, Managed, ObjRef, Ref};
pub use header::{Header, INITIAL_REF_COUNT};
pub use string::TroveString;
