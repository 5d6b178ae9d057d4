//! # subway-transit
//!
//! Domain model, stores, and services for a subway-line management service.
//!
//! ## Features
//!
//! - **Typed identifiers**: newtypes over store-generated row ids
//! - **Identity-by-name lines**: two lines are the same line iff their names match
//! - **Thin stores**: one persistence trait per entity, SQLite-backed
//! - **Service layer**: uniqueness and existence rules live here, not in the stores
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use subway_transit::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> subway_transit::Result<()> {
//!     let store = Arc::new(SqliteStore::in_memory().await?);
//!     store.migrate().await?;
//!
//!     let lines = LineService::new(store.clone(), store.clone(), store.clone());
//!     let line = lines.create("2호선", "bg-green-600").await?;
//!     assert_eq!(lines.find_one(line.id).await?.name, "2호선");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod identifiers;
pub mod models;
pub mod service;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::error::{Result, SubwayError};
    pub use crate::identifiers::{LineId, SectionId, StationId};
    pub use crate::models::{Line, NewSection, Section, Station};
    pub use crate::service::{LineService, StationService};
    pub use crate::store::{LineStore, SectionStore, SqliteStore, StationStore};
}

pub use prelude::*;
