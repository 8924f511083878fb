//! Waypoint and route value types.
//!
//! A route's distance and time are always derived from its waypoints.
//! They are recomputed on construction, on every waypoint change, and on
//! deserialization, so caller-supplied totals never survive.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::haversine::{estimate_time, route_distance};

/// Name given to routes built without one.
pub const DEFAULT_ROUTE_NAME: &str = "Untitled Route";

/// A single labeled geographic stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub name: String,
}

impl Waypoint {
    /// Creates an unnamed waypoint. Coordinates are not range-checked.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self::named(lat, lng, "")
    }

    /// Creates a named waypoint. Coordinates are not range-checked.
    pub fn named(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// Creates a waypoint after checking latitude and longitude ranges.
    pub fn try_new(lat: f64, lng: f64, name: impl Into<String>) -> Result<Self, RouteError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(RouteError::InvalidCoordinate { lat, lng });
        }
        Ok(Self::named(lat, lng, name))
    }
}

/// An ordered sequence of waypoints plus derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RouteInput")]
pub struct Route {
    name: String,
    waypoints: Vec<Waypoint>,
    total_distance: f64,
    estimated_time: u32,
}

/// Wire shape accepted when deserializing a route. Totals are not read.
#[derive(Deserialize)]
struct RouteInput {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    waypoints: Vec<Waypoint>,
}

impl From<RouteInput> for Route {
    fn from(input: RouteInput) -> Self {
        Route::new(
            input.name.unwrap_or_else(|| DEFAULT_ROUTE_NAME.to_string()),
            input.waypoints,
        )
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE_NAME, Vec::new())
    }
}

impl Route {
    pub fn new(name: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        let total_distance = route_distance(&waypoints);
        Self {
            name: name.into(),
            waypoints,
            total_distance,
            estimated_time: estimate_time(total_distance),
        }
    }

    /// Builds a route with the default name, replacing an empty name too.
    pub fn with_optional_name(name: Option<&str>, waypoints: Vec<Waypoint>) -> Self {
        let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_ROUTE_NAME);
        Self::new(name, waypoints)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Total distance in kilometers, rounded to 2 decimals.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated travel time in minutes.
    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }

    /// Appends a waypoint to the end of the route.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
        self.recompute();
    }

    /// Replaces the whole waypoint sequence, returning the previous one.
    pub fn replace_waypoints(&mut self, waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
        let previous = std::mem::replace(&mut self.waypoints, waypoints);
        self.recompute();
        previous
    }

    fn recompute(&mut self) {
        self.total_distance = route_distance(&self.waypoints);
        self.estimated_time = estimate_time(self.total_distance);
    }
}
