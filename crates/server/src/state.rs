use std::sync::Arc;

use subway_transit::{LineService, SqliteStore, StationService};

/// Shared handler state: the two services over one store.
#[derive(Clone)]
pub struct AppState {
    pub lines: LineService,
    pub stations: StationService,
}

impl AppState {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self {
            lines: LineService::new(store.clone(), store.clone(), store.clone()),
            stations: StationService::new(store.clone(), store),
        }
    }
}
