use std::sync::Arc;

use crate::error::{Result, SubwayError};
use crate::identifiers::{LineId, StationId};
use crate::models::{Line, NewSection};
use crate::store::{LineStore, SectionStore, StationStore};

/// Create/read/update/delete over lines.
///
/// Lines are identified by name (see [`Line`]'s equality), so creation
/// rejects an already-used name whatever its color. Renames are not
/// re-checked against the name space.
#[derive(Clone)]
pub struct LineService {
    lines: Arc<dyn LineStore>,
    sections: Arc<dyn SectionStore>,
    stations: Arc<dyn StationStore>,
}

impl LineService {
    pub fn new(
        lines: Arc<dyn LineStore>,
        sections: Arc<dyn SectionStore>,
        stations: Arc<dyn StationStore>,
    ) -> Self {
        Self {
            lines,
            sections,
            stations,
        }
    }

    /// Store a new line without sections.
    pub async fn create(&self, name: &str, color: &str) -> Result<Line> {
        self.ensure_name_unused(name).await?;
        let id = self.lines.save(name, color).await?;
        Ok(Line::new(id, name, color))
    }

    /// Store a new line together with its initial section.
    ///
    /// Both endpoint stations are checked before anything is written.
    pub async fn create_with_section(
        &self,
        name: &str,
        color: &str,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: i64,
    ) -> Result<Line> {
        self.ensure_name_unused(name).await?;
        self.ensure_station_exists(up_station_id).await?;
        self.ensure_station_exists(down_station_id).await?;

        let id = self.lines.save(name, color).await?;
        self.sections
            .save(NewSection {
                line_id: id,
                up_station_id,
                down_station_id,
                distance,
            })
            .await?;

        let sections = self.sections.find_by_line_id(id).await?;
        Ok(Line::with_sections(id, name, color, sections))
    }

    /// The line with its section list attached; stations derive from it.
    pub async fn find_one(&self, id: LineId) -> Result<Line> {
        let line = self
            .lines
            .find_by_id(id)
            .await?
            .ok_or(SubwayError::LineNotFound(id))?;
        let sections = self.sections.find_by_line_id(id).await?;
        Ok(Line::with_sections(line.id, line.name, line.color, sections))
    }

    /// Every line in id order, section lists left empty.
    pub async fn find_all(&self) -> Result<Vec<Line>> {
        self.lines.find_all().await
    }

    /// Rename/recolor an existing line.
    pub async fn update(&self, id: LineId, name: &str, color: &str) -> Result<()> {
        match self.lines.update(id, name, color).await? {
            0 => Err(SubwayError::LineNotFound(id)),
            _ => Ok(()),
        }
    }

    /// Remove a line; its sections go with it.
    pub async fn delete(&self, id: LineId) -> Result<()> {
        match self.lines.delete(id).await? {
            0 => Err(SubwayError::LineNotFound(id)),
            _ => Ok(()),
        }
    }

    async fn ensure_name_unused(&self, name: &str) -> Result<()> {
        let existing = self.lines.find_all().await?;
        if existing.iter().any(|line| line.name == name) {
            return Err(SubwayError::DuplicateLineName(name.to_owned()));
        }
        Ok(())
    }

    async fn ensure_station_exists(&self, id: StationId) -> Result<()> {
        self.stations
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or(SubwayError::StationNotFound(id))
    }
}
