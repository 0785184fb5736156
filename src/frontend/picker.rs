use crate::frontend::widget::{MapOptions, MapWidget, Place, WidgetEvent, SEARCH_PLACEHOLDER};
use crate::map::consts::{DEFAULT_ZOOM, USC_COORDINATES};
use crate::map::models::Coordinate;
use crate::routes::models::Endpoint;
use secrecy::SecretString;
use tokio::sync::mpsc;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum PickerState {
    #[default]
    NoSelection,
    HasSelection(Coordinate),
}

impl PickerState {
    pub fn coordinate(self) -> Option<Coordinate> {
        match self {
            PickerState::NoSelection => None,
            PickerState::HasSelection(coordinate) => Some(coordinate),
        }
    }
}

/// Sent to the owning form every time a picker's selection changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SelectionChanged {
    pub slot: Endpoint,
    pub coordinate: Option<Coordinate>,
}

pub struct LocationPicker<W: MapWidget> {
    slot: Endpoint,
    widget: W,
    state: PickerState,
    owner: mpsc::UnboundedSender<SelectionChanged>,
}

impl<W> LocationPicker<W>
where
    W: MapWidget,
{
    pub fn new(
        slot: Endpoint,
        mut widget: W,
        api_key: Option<&SecretString>,
        owner: mpsc::UnboundedSender<SelectionChanged>,
    ) -> Self {
        widget.render_map(&MapOptions {
            api_key,
            center: USC_COORDINATES,
            zoom: DEFAULT_ZOOM,
            map_type_control: false,
        });
        widget.render_search_box(SEARCH_PLACEHOLDER);
        Self {
            slot,
            widget,
            state: PickerState::NoSelection,
            owner,
        }
    }

    pub fn slot(&self) -> Endpoint {
        self.slot
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Reacts to a user action on the widget. Returns whether the selection was updated.
    pub fn handle(&mut self, event: WidgetEvent) -> bool {
        match event {
            WidgetEvent::PlaceResolved(Place {
                geometry: Some(coordinate),
                ..
            }) => {
                self.move_marker(coordinate);
                self.select(coordinate);
                true
            }
            WidgetEvent::PlaceResolved(Place {
                name,
                geometry: None,
            }) => {
                tracing::warn!(
                    slot = %self.slot,
                    place = %name,
                    "Selected place has no geometry, ignoring it."
                );
                false
            }
            WidgetEvent::MapClicked(coordinate) => {
                self.move_marker(coordinate);
                self.select(coordinate);
                true
            }
            WidgetEvent::MarkerDragEnded(coordinate) => {
                if self.state == PickerState::NoSelection {
                    tracing::warn!(slot = %self.slot, "Marker drag reported without a marker.");
                    return false;
                }
                // The widget already shows the marker at the drop position.
                self.select(coordinate);
                true
            }
        }
    }

    /// Forgets the current selection and takes the marker off the map.
    pub fn clear(&mut self) {
        if self.state == PickerState::NoSelection {
            return;
        }
        self.widget.remove_marker();
        self.state = PickerState::NoSelection;
        self.notify(None);
    }

    fn move_marker(&mut self, coordinate: Coordinate) {
        if self.state != PickerState::HasSelection(coordinate) {
            self.widget.place_marker(coordinate);
        }
    }

    fn select(&mut self, coordinate: Coordinate) {
        self.state = PickerState::HasSelection(coordinate);
        self.notify(Some(coordinate));
    }

    fn notify(&self, coordinate: Option<Coordinate>) {
        let event = SelectionChanged {
            slot: self.slot,
            coordinate,
        };
        if self.owner.send(event).is_err() {
            tracing::debug!(slot = %self.slot, "Picker owner is gone, dropping selection.");
        }
    }
}
