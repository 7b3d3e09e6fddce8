//! JSON-file catalog backend.
//!
//! The document is a serialised [`Catalog`]. It is read once on open and
//! rewritten atomically (temp file + rename) after every mutation.
//!
//! Mutations are serialised by a writer lock. The file is written while
//! only that lock is held, so readers keep seeing the previous catalog
//! until the new one has reached disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::{catalog_reads, catalog_writes, CatalogStore, Result};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<Catalog>,
    writer: Mutex<()>,
}

impl FileStore {
    /// Open the catalog document at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let mut catalog: Catalog =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
        catalog.reconcile();

        tracing::info!(
            path = %path.display(),
            clusters = catalog.clusters.len(),
            mentors = catalog.mentors.len(),
            keywords = catalog.keywords.len(),
            "loaded catalog file"
        );

        Ok(Self {
            path,
            inner: RwLock::new(catalog),
            writer: Mutex::new(()),
        })
    }

    /// Write `catalog` to `path` and open it.
    pub fn create(path: impl Into<PathBuf>, catalog: &Catalog) -> Result<Self> {
        let path = path.into();
        persist(&path, catalog)?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to a copy of the catalog, persist it, then publish it.
    /// A failed write leaves both the file and the in-memory catalog as they
    /// were.
    fn mutate<T>(&self, f: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = self.read().clone();
        let out = f(&mut next)?;
        persist(&self.path, &next)?;
        *self.write() = next;
        Ok(out)
    }
}

fn persist(path: &Path, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    let io = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, json).map_err(io)?;
    fs::rename(&tmp, path).map_err(io)?;
    tracing::debug!(path = %path.display(), "catalog persisted");
    Ok(())
}

impl CatalogStore for FileStore {
    catalog_reads!();
    catalog_writes!();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
