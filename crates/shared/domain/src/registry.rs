//! Read-only set of person identifiers known to exist.
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it
//! afterwards, so handlers read it without synchronization.

use std::collections::BTreeSet;

use crate::constants::{DEFAULT_PERSON_IDS, PERSON_NOT_FOUND_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// Identifiers answered by existence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRegistry {
    ids: BTreeSet<i64>,
}

impl PersonRegistry {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Check whether `id` is a known person
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Confirm `id` exists, failing with a not-found error otherwise
    pub fn ensure_exists(&self, id: i64) -> DomainResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomainError::not_found(PERSON_NOT_FOUND_MESSAGE))
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_IDS.iter().copied())
    }
}
