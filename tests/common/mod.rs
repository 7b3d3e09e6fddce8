//! Shared test utilities for mentormatch integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fixtures are deterministic: seed catalogs are anchored
//! at a fixed instant rather than `Utc::now()`.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
