use crate::identifiers::{LineId, SectionId, StationId};
use crate::models::station::Station;

/// A directed edge between two stations on one line.
///
/// Section order within a line is insertion order; there is no explicit
/// sequence column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub line_id: LineId,
    pub up_station: Station,
    pub down_station: Station,
    pub distance: i64,
}

/// A section that has not been persisted yet.
#[derive(Clone, Copy, Debug)]
pub struct NewSection {
    pub line_id: LineId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}
