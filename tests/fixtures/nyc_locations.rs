//! Real New York harbor area locations for test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use route_planner::Waypoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn waypoint(&self) -> Waypoint {
        Waypoint::named(self.lat, self.lng, self.name)
    }
}

// ============================================================================
// Manhattan landmarks
// ============================================================================

pub const MANHATTAN: &[Location] = &[
    Location::new("Battery Park", 40.7033, -74.0170),
    Location::new("One World Trade Center", 40.7127, -74.0134),
    Location::new("Washington Square Park", 40.7308, -73.9973),
    Location::new("Empire State Building", 40.7484, -73.9857),
    Location::new("Times Square", 40.7580, -73.9855),
    Location::new("Central Park Zoo", 40.7678, -73.9718),
];

// ============================================================================
// New Jersey waterfront
// ============================================================================

pub const NEW_JERSEY: &[Location] = &[
    Location::new("Liberty State Park", 40.7044, -74.0539),
    Location::new("Exchange Place", 40.7163, -74.0331),
    Location::new("Hoboken Terminal", 40.7350, -74.0275),
    Location::new("Weehawken Port Imperial", 40.7766, -74.0137),
];

pub fn manhattan_waypoints() -> Vec<Waypoint> {
    MANHATTAN.iter().map(Location::waypoint).collect()
}

pub fn new_jersey_waypoints() -> Vec<Waypoint> {
    NEW_JERSEY.iter().map(Location::waypoint).collect()
}

/// The three-stop grid route used across tests: north, then west.
pub fn grid_route() -> Vec<Waypoint> {
    vec![
        Waypoint::new(40.0, -74.0),
        Waypoint::new(40.1, -74.0),
        Waypoint::new(40.1, -74.1),
    ]
}
