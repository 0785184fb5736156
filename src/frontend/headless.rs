use crate::frontend::widget::{MapOptions, MapWidget};
use crate::map::models::Coordinate;
use crate::routes::models::Endpoint;

/// A widget with no screen. Logs what it would draw; used by the `plan` command.
#[derive(Debug)]
pub struct HeadlessWidget {
    slot: Endpoint,
    marker: Option<Coordinate>,
}

impl HeadlessWidget {
    pub fn new(slot: Endpoint) -> Self {
        Self { slot, marker: None }
    }

    pub fn marker(&self) -> Option<Coordinate> {
        self.marker
    }
}

impl MapWidget for HeadlessWidget {
    fn render_map(&mut self, options: &MapOptions<'_>) {
        tracing::debug!(
            slot = %self.slot,
            center = ?options.center,
            zoom = options.zoom,
            has_api_key = options.api_key.is_some(),
            "Rendering map."
        );
    }

    fn render_search_box(&mut self, placeholder: &str) {
        tracing::debug!(slot = %self.slot, placeholder, "Rendering search box.");
    }

    fn place_marker(&mut self, at: Coordinate) {
        tracing::debug!(slot = %self.slot, marker = ?at, "Placing marker.");
        self.marker = Some(at);
    }

    fn remove_marker(&mut self) {
        tracing::debug!(slot = %self.slot, "Removing marker.");
        self.marker = None;
    }
}
