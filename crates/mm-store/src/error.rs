//! Error type for catalog stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`CatalogStore`](crate::CatalogStore) backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("keyword {0:?} already exists")]
    DuplicateKeyword(String),

    /// A required text field was empty after trimming.
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("career cluster {0} does not exist")]
    UnknownCluster(u32),

    /// An insert referenced a record that is not in the catalog.
    #[error("{kind} {id} does not exist")]
    UnknownRecord { kind: &'static str, id: u32 },

    #[error("not authorized to modify {kind} {id}")]
    NotOwner { kind: &'static str, id: u32 },

    #[error("invalid email address {0:?}")]
    InvalidEmail(String),

    #[error("no {0} ids left")]
    IdsExhausted(&'static str),

    #[error("catalog I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// True for errors caused by the caller's input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. }
                | StoreError::DuplicateKeyword(_)
                | StoreError::Blank(_)
                | StoreError::UnknownCluster(_)
                | StoreError::UnknownRecord { .. }
                | StoreError::NotOwner { .. }
                | StoreError::InvalidEmail(_)
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
