use std::hash::{Hash, Hasher};

use crate::identifiers::LineId;
use crate::models::section::Section;
use crate::models::station::Station;

/// A named, colored route composed of an ordered list of sections.
#[derive(Clone, Debug)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub sections: Vec<Section>,
}

impl Line {
    /// A line without sections, as stored by the bare creation path.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_sections(id, name, color, Vec::new())
    }

    /// A line rehydrated with its full section list.
    pub fn with_sections(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            sections,
        }
    }

    /// Rename/recolor in place.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Every station the line touches, in section order, duplicates removed
    /// keeping the first occurrence.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = Vec::new();
        for section in &self.sections {
            for station in [&section.up_station, &section.down_station] {
                if !stations.contains(station) {
                    stations.push(station.clone());
                }
            }
        }
        stations
    }
}

// Line identity is the name: two lines with the same name are the same line,
// whatever their ids or colors. Duplicate detection on create rests on this.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{SectionId, StationId};

    fn station(id: i64, name: &str) -> Station {
        Station::new(StationId::new(id), name)
    }

    fn section(id: i64, line_id: LineId, up: Station, down: Station) -> Section {
        Section {
            id: SectionId::new(id),
            line_id,
            up_station: up,
            down_station: down,
            distance: 10,
        }
    }

    #[test]
    fn test_stations_walks_sections_in_order_without_duplicates() {
        let line_id = LineId::new(1);
        let a = station(1, "강남역");
        let b = station(2, "잠실역");
        let c = station(3, "신림역");

        // (A,B),(B,C) shares B between the two sections
        let line = Line::with_sections(
            line_id,
            "2호선",
            "bg-green-600",
            vec![
                section(1, line_id, a.clone(), b.clone()),
                section(2, line_id, b.clone(), c.clone()),
            ],
        );

        assert_eq!(line.stations(), vec![a, b, c]);
    }

    #[test]
    fn test_stations_is_empty_without_sections() {
        let line = Line::new(LineId::new(1), "2호선", "bg-green-600");
        assert!(line.stations().is_empty());
    }

    #[test]
    fn test_lines_are_equal_iff_names_are_equal() {
        let a = Line::new(LineId::new(1), "2호선", "bg-green-600");
        let b = Line::new(LineId::new(2), "2호선", "bg-red-600");
        let c = Line::new(LineId::new(1), "3호선", "bg-green-600");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_line_hash_follows_name_identity() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Line::new(LineId::new(1), "2호선", "bg-green-600"));

        assert!(seen.contains(&Line::new(LineId::new(9), "2호선", "bg-red-600")));
        assert!(!seen.contains(&Line::new(LineId::new(1), "3호선", "bg-green-600")));
    }

    #[test]
    fn test_update_renames_and_recolors() {
        let mut line = Line::new(LineId::new(1), "2호선", "bg-green-600");
        line.update("3호선", "bg-orange-600");

        assert_eq!(line.name, "3호선");
        assert_eq!(line.color, "bg-orange-600");
    }
}
