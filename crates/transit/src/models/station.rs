use crate::identifiers::StationId;

/// A named stop referenced by one or more sections.
///
/// Immutable once created; renaming a station is not an operation the
/// service offers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
