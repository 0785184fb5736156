use crate::map::models::ServiceArea;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub area: Arc<ServiceArea>,
}

impl AppContext {
    pub fn new(area: ServiceArea) -> Self {
        Self {
            area: Arc::new(area),
        }
    }
}
