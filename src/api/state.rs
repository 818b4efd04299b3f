use std::sync::Arc;

use crate::query::QueryService;
use crate::storage::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn queries(&self) -> QueryService<'_, dyn RecordStore> {
        QueryService::new(self.store.as_ref())
    }
}
