// File: crates/playground-chart/src/uid.rs
// Summary: Host-owned monotonic allocator for document-unique element ids.

use std::cell::Cell;
use std::fmt;

/// Hands out `O-1`, `O-2`, ... Share one allocator (via `Rc`) across every widget on a page.
#[derive(Debug)]
pub struct UidAllocator {
    prefix: String,
    next: Cell<u64>,
}

impl UidAllocator {
    pub fn new() -> Self {
        Self::with_prefix("O")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: Cell::new(1) }
    }

    pub fn next(&self) -> Uid {
        let n = self.next.get();
        self.next.set(n + 1);
        Uid { id: format!("{}-{}", self.prefix, n) }
    }
}

impl Default for UidAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// An allocated id. `Display` yields the paint reference form, `url(#O-1)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uid {
    pub id: String,
}

impl Uid {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url(#{})", self.id)
    }
}
