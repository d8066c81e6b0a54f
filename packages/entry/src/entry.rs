//! Entry Set
//!
//! Ordered, deduplicated collection of the build entries produced by one
//! resolution run.

use serde::Serialize;
use std::collections::HashSet;

use crate::paths;

/// One build entry handed to the orchestrator: the logical bundle name and
/// the relative module path it is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryDescriptor {
    pub name: String,
    pub path: String,
}

impl EntryDescriptor {
    /// Build a descriptor, deriving the name from the path's base filename
    /// (extension stripped) when none is supplied.
    pub fn new(path: impl Into<String>, name: Option<String>) -> Self {
        let path = path.into();
        let name =
            name.unwrap_or_else(|| paths::strip_ext(paths::file_name(&path)).to_string());
        EntryDescriptor { name, path }
    }
}

/// Insertion-ordered set of descriptors. Membership is structural on
/// `(name, path)`, so the orchestrator sees each entry once, in the order
/// of first insertion.
#[derive(Debug, Default)]
pub struct EntrySet {
    entries: Vec<EntryDescriptor>,
    seen: HashSet<EntryDescriptor>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `descriptor` unless a structurally equal one is already
    /// present. Returns whether the set grew.
    pub fn insert(&mut self, descriptor: EntryDescriptor) -> bool {
        if !self.seen.insert(descriptor.clone()) {
            return false;
        }
        self.entries.push(descriptor);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryDescriptor> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<EntryDescriptor> {
        self.entries
    }
}
