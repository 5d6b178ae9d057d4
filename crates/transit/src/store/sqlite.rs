//! SQLite-backed implementation of the store traits.

use std::collections::HashSet;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::identifiers::{LineId, SectionId, StationId};
use crate::models::{Line, NewSection, Section, Station};
use crate::store::{BoxFuture, LineStore, SectionStore, StationStore};

/// One pool shared by all three store traits.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `url`, creating the file if missing.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database, for tests.
    ///
    /// Pinned to a single connection that never expires: each pooled
    /// connection would otherwise see its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the schema. Idempotent.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS station (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS line (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 color TEXT NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS section (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 line_id INTEGER NOT NULL REFERENCES line(id) ON DELETE CASCADE,
                 up_station_id INTEGER NOT NULL REFERENCES station(id),
                 down_station_id INTEGER NOT NULL REFERENCES station(id),
                 distance INTEGER NOT NULL DEFAULT 0
             )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct StationRow {
    id: StationId,
    name: String,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station::new(row.id, row.name)
    }
}

#[derive(sqlx::FromRow)]
struct LineRow {
    id: LineId,
    name: String,
    color: String,
}

impl From<LineRow> for Line {
    fn from(row: LineRow) -> Self {
        Line::new(row.id, row.name, row.color)
    }
}

/// Section joined with both endpoint stations.
#[derive(sqlx::FromRow)]
struct SectionRow {
    id: SectionId,
    line_id: LineId,
    distance: i64,
    up_id: StationId,
    up_name: String,
    down_id: StationId,
    down_name: String,
}

impl From<SectionRow> for Section {
    fn from(row: SectionRow) -> Self {
        Section {
            id: row.id,
            line_id: row.line_id,
            up_station: Station::new(row.up_id, row.up_name),
            down_station: Station::new(row.down_id, row.down_name),
            distance: row.distance,
        }
    }
}

// ============================================================================
// Store trait implementations
// ============================================================================

impl StationStore for SqliteStore {
    fn save<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<StationId>> {
        Box::pin(async move {
            let result = sqlx::query("INSERT INTO station (name) VALUES (?1)")
                .bind(name)
                .execute(&self.pool)
                .await?;
            Ok(StationId::new(result.last_insert_rowid()))
        })
    }

    fn find_by_id(&self, id: StationId) -> BoxFuture<'_, Result<Option<Station>>> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, StationRow>("SELECT id, name FROM station WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
            Ok(row.map(Station::from))
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Result<Vec<Station>>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, StationRow>("SELECT id, name FROM station ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
            Ok(rows.into_iter().map(Station::from).collect())
        })
    }

    fn delete(&self, id: StationId) -> BoxFuture<'_, Result<u64>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM station WHERE id = ?1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected())
        })
    }
}

impl SectionStore for SqliteStore {
    fn save(&self, section: NewSection) -> BoxFuture<'_, Result<SectionId>> {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO section (line_id, up_station_id, down_station_id, distance)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(section.line_id)
            .bind(section.up_station_id)
            .bind(section.down_station_id)
            .bind(section.distance)
            .execute(&self.pool)
            .await?;
            Ok(SectionId::new(result.last_insert_rowid()))
        })
    }

    fn find_by_line_id(&self, line_id: LineId) -> BoxFuture<'_, Result<Vec<Section>>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, SectionRow>(
                "SELECT s.id, s.line_id, s.distance,
                        us.id AS up_id, us.name AS up_name,
                        ds.id AS down_id, ds.name AS down_name
                 FROM section s
                 JOIN station us ON us.id = s.up_station_id
                 JOIN station ds ON ds.id = s.down_station_id
                 WHERE s.line_id = ?1
                 ORDER BY s.id",
            )
            .bind(line_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows.into_iter().map(Section::from).collect())
        })
    }
}

impl LineStore for SqliteStore {
    fn save<'a>(&'a self, name: &'a str, color: &'a str) -> BoxFuture<'a, Result<LineId>> {
        Box::pin(async move {
            let result = sqlx::query("INSERT INTO line (name, color) VALUES (?1, ?2)")
                .bind(name)
                .bind(color)
                .execute(&self.pool)
                .await?;
            Ok(LineId::new(result.last_insert_rowid()))
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Result<Vec<Line>>> {
        Box::pin(async move {
            let rows =
                sqlx::query_as::<_, LineRow>("SELECT id, name, color FROM line ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?;
            Ok(rows.into_iter().map(Line::from).collect())
        })
    }

    fn find_by_id(&self, id: LineId) -> BoxFuture<'_, Result<Option<Line>>> {
        Box::pin(async move {
            let row =
                sqlx::query_as::<_, LineRow>("SELECT id, name, color FROM line WHERE id = ?1")
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
            Ok(row.map(Line::from))
        })
    }

    fn find_station_ids_by_line_id(
        &self,
        id: LineId,
    ) -> BoxFuture<'_, Result<HashSet<StationId>>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, (StationId, StationId)>(
                "SELECT up_station_id, down_station_id FROM section WHERE line_id = ?1",
            )
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

            let mut ids = HashSet::new();
            for (up, down) in rows {
                ids.insert(up);
                ids.insert(down);
            }
            Ok(ids)
        })
    }

    fn update<'a>(
        &'a self,
        id: LineId,
        name: &'a str,
        color: &'a str,
    ) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let result = sqlx::query("UPDATE line SET name = ?1, color = ?2 WHERE id = ?3")
                .bind(name)
                .bind(color)
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected())
        })
    }

    fn delete(&self, id: LineId) -> BoxFuture<'_, Result<u64>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM line WHERE id = ?1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected())
        })
    }
}
