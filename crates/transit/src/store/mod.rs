//! Persistence-access traits, one per entity type.
//!
//! The traits are object-safe so services can hold `Arc<dyn ...>` and tests
//! can swap backends. All of them are implemented by [`SqliteStore`].

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::identifiers::{LineId, SectionId, StationId};
use crate::models::{Line, NewSection, Section, Station};

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Boxed future used by the object-safe store traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Store for stations.
pub trait StationStore: Send + Sync {
    /// Insert a station, returning its generated id. No duplicate check.
    fn save<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<StationId>>;

    fn find_by_id(&self, id: StationId) -> BoxFuture<'_, Result<Option<Station>>>;

    /// All stations in id order.
    fn find_all(&self) -> BoxFuture<'_, Result<Vec<Station>>>;

    /// Affected-row count: 0 when the id does not exist.
    fn delete(&self, id: StationId) -> BoxFuture<'_, Result<u64>>;
}

/// Store for the sections tying stations to a line.
pub trait SectionStore: Send + Sync {
    fn save(&self, section: NewSection) -> BoxFuture<'_, Result<SectionId>>;

    /// Sections of one line in insertion order, endpoint stations hydrated.
    fn find_by_line_id(&self, line_id: LineId) -> BoxFuture<'_, Result<Vec<Section>>>;
}

/// Store for lines.
pub trait LineStore: Send + Sync {
    fn save<'a>(&'a self, name: &'a str, color: &'a str) -> BoxFuture<'a, Result<LineId>>;

    /// All lines in id order. Section lists are left empty; list reads only
    /// need id/name/color.
    fn find_all(&self) -> BoxFuture<'_, Result<Vec<Line>>>;

    fn find_by_id(&self, id: LineId) -> BoxFuture<'_, Result<Option<Line>>>;

    /// Every station id referenced by the line's sections.
    fn find_station_ids_by_line_id(
        &self,
        id: LineId,
    ) -> BoxFuture<'_, Result<HashSet<StationId>>>;

    /// Affected-row count: 0 when the id does not exist.
    fn update<'a>(
        &'a self,
        id: LineId,
        name: &'a str,
        color: &'a str,
    ) -> BoxFuture<'a, Result<u64>>;

    /// Affected-row count: 0 when the id does not exist. Sections of the
    /// line are deleted with it.
    fn delete(&self, id: LineId) -> BoxFuture<'_, Result<u64>>;
}
