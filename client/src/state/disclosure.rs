//! Expanded-abstract tracking for publication cards.
//!
//! Membership only: each id is open or closed, independently of every other.
//! Not persisted; a reload starts from an empty set.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use std::collections::HashSet;

use crate::content::PublicationId;

/// Set of publication ids whose abstract is currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureSet {
    open: HashSet<PublicationId>,
}

impl DisclosureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` and return whether it is now open.
    ///
    /// Ids are not validated against the publication list.
    pub fn toggle(&mut self, id: PublicationId) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_open(&self, id: PublicationId) -> bool {
        self.open.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }
}
