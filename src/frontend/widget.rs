use crate::map::models::Coordinate;
use secrecy::SecretString;

pub const SEARCH_PLACEHOLDER: &str = "Search for a location";

/// What a picker asks the widget to draw when it starts up.
#[derive(Debug)]
pub struct MapOptions<'a> {
    /// Opaque credential for the map provider. Forwarded untouched.
    pub api_key: Option<&'a SecretString>,
    pub center: Coordinate,
    pub zoom: u8,
    /// Whether to show the "Map / Satellite" switcher.
    pub map_type_control: bool,
}

/// A place the address search resolved. Not every suggestion comes with a location.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub geometry: Option<Coordinate>,
}

/// User actions reported by the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    PlaceResolved(Place),
    MapClicked(Coordinate),
    MarkerDragEnded(Coordinate),
}

/// An interactive map with an address-search box and at most one draggable marker.
///
/// Implementations own whatever global state the map provider needs; every picker gets its own
/// instance.
pub trait MapWidget: Send {
    fn render_map(&mut self, options: &MapOptions<'_>);

    fn render_search_box(&mut self, placeholder: &str);

    /// Shows the marker at `at`, creating it if there is none yet.
    fn place_marker(&mut self, at: Coordinate);

    fn remove_marker(&mut self);
}
