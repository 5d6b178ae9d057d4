use std::sync::Arc;

use crate::error::{Result, SubwayError};
use crate::identifiers::StationId;
use crate::models::Station;
use crate::store::{LineStore, StationStore};

/// Create/read/delete over stations.
#[derive(Clone)]
pub struct StationService {
    stations: Arc<dyn StationStore>,
    lines: Arc<dyn LineStore>,
}

impl StationService {
    pub fn new(stations: Arc<dyn StationStore>, lines: Arc<dyn LineStore>) -> Self {
        Self { stations, lines }
    }

    pub async fn create(&self, name: &str) -> Result<Station> {
        let id = self.stations.save(name).await?;
        Ok(Station::new(id, name))
    }

    pub async fn find_all(&self) -> Result<Vec<Station>> {
        self.stations.find_all().await
    }

    /// Remove a station, refusing while any line still touches it.
    pub async fn delete(&self, id: StationId) -> Result<()> {
        self.stations
            .find_by_id(id)
            .await?
            .ok_or(SubwayError::StationNotFound(id))?;

        for line in self.lines.find_all().await? {
            let referenced = self.lines.find_station_ids_by_line_id(line.id).await?;
            if referenced.contains(&id) {
                return Err(SubwayError::StationInUse(id));
            }
        }

        match self.stations.delete(id).await? {
            0 => Err(SubwayError::StationNotFound(id)),
            _ => Ok(()),
        }
    }
}
