//! mentormatch: student/mentor matching with keyword-expansion search.
//!
//! This crate wires the workspace together for the `mentormatch` binary and
//! the integration harnesses: it opens the configured catalog store and
//! renders explained search results.
//!
//! # Architecture
//!
//! ```text
//! config ──► store (memory | json file) ──► mm-server router ──► HTTP
//!                 │
//!                 └──► mm-core search engine ◄── `mentormatch search`
//! ```
//!
//! The engine in `mm-core` is pure and synchronous; the store owns the
//! catalog; the server and the CLI are thin callers of both.

use std::sync::Arc;

use anyhow::Context;
use mm_core::config::Config;
use mm_core::{Hit, Searchable};
use mm_store::{CatalogStore, FileStore, MemoryStore};
use serde::Serialize;
use serde_json::{json, Value};

/// Open the store named by `config.catalog`: the JSON file when a path is
/// set, the built-in seed catalog otherwise.
pub fn open_store(config: &Config) -> anyhow::Result<Arc<dyn CatalogStore>> {
    match &config.catalog.path {
        Some(path) => {
            let store = FileStore::open(path)
                .with_context(|| format!("failed to open catalog {}", path.display()))?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(MemoryStore::seeded())),
    }
}

/// Render hits as `[{"matchClass": ..., "record": {...}}]`.
pub fn explain_json<T: Searchable + Serialize>(hits: &[Hit<'_, T>]) -> anyhow::Result<Value> {
    let rows = hits
        .iter()
        .map(|hit| {
            Ok(json!({
                "matchClass": hit.class,
                "record": serde_json::to_value(hit.entity)?,
            }))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;
    Ok(Value::Array(rows))
}
