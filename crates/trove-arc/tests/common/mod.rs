//! Test Utilities for the Trove ARC Test Suite
//!
//! Managed probe types whose destructors leave observable traces, so the
//! tests can assert exactly when and how often destruction happens.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trove_arc::{Managed, ObjRef, Ref};

/// Shared destruction counter
pub type DropCounter = Rc<Cell<u32>>;

pub fn drop_counter() -> DropCounter {
    Rc::new(Cell::new(0))
}

/// Managed value that bumps a shared counter from its destructor
pub struct Probe {
    drops: DropCounter,
}

impl Probe {
    pub fn create(drops: &DropCounter) -> Ref<Probe> {
        Ref::new(Probe {
            drops: drops.clone(),
        })
    }
}

impl Managed for Probe {
    fn kind(&self) -> &'static str {
        "probe"
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Shared destruction-order log
pub type DropOrder = Rc<RefCell<Vec<usize>>>;

pub fn drop_order() -> DropOrder {
    Rc::new(RefCell::new(Vec::new()))
}

/// Managed value that records when it was destroyed relative to its peers
pub struct OrderedProbe {
    order: DropOrder,
    tag: usize,
}

impl OrderedProbe {
    pub fn create(order: &DropOrder, tag: usize) -> Ref<OrderedProbe> {
        Ref::new(OrderedProbe {
            order: order.clone(),
            tag,
        })
    }
}

impl Managed for OrderedProbe {
    fn kind(&self) -> &'static str {
        "ordered-probe"
    }
}

impl Drop for OrderedProbe {
    fn drop(&mut self) {
        self.order.borrow_mut().push(self.tag);
    }
}

/// Composite object owning one reference to an optional child
///
/// Its destructor releases the child, the contract every managed type
/// that holds nested managed objects follows.
pub struct Node {
    drops: DropCounter,
    child: Option<ObjRef>,
}

impl Node {
    /// Takes over one reference to `child`
    pub fn create(drops: &DropCounter, child: Option<ObjRef>) -> Ref<Node> {
        Ref::new(Node {
            drops: drops.clone(),
            child,
        })
    }
}

impl Managed for Node {
    fn kind(&self) -> &'static str {
        "node"
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
        trove_arc::release(self.child.take());
    }
}
