//! In-memory catalog backend.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::{catalog_reads, catalog_writes, seed, CatalogStore, Result};

/// A catalog held entirely in memory. Mutations are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Catalog>,
}

impl MemoryStore {
    /// The built-in seed catalog with availability starting today.
    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// The built-in seed catalog with availability anchored at `now`.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let store = Self::from_catalog(seed::catalog(now));
        tracing::info!(
            clusters = store.read().clusters.len(),
            mentors = store.read().mentors.len(),
            "seeded in-memory catalog"
        );
        store
    }

    pub fn from_catalog(mut catalog: Catalog) -> Self {
        catalog.reconcile();
        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// Copy of the current catalog.
    pub fn snapshot(&self) -> Catalog {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to a copy and swap it in, so a rejected change leaves
    /// nothing half-applied.
    fn mutate<T>(&self, f: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let mut guard = self.write();
        let mut next = guard.clone();
        let out = f(&mut next)?;
        *guard = next;
        Ok(out)
    }
}

impl CatalogStore for MemoryStore {
    catalog_reads!();
    catalog_writes!();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
