//! Great-circle distance and travel time estimation.
//!
//! Distances are straight-line (haversine) kilometers between consecutive
//! waypoints. Travel time is a linear model over an assumed average speed.

use crate::waypoint::Waypoint;

/// Average travel speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Linear travel time model.
///
/// Estimates travel time from distance and an assumed speed. No terrain,
/// traffic or mode-of-travel adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    /// Assumed average speed in km/h.
    pub average_speed_kmh: f64,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl TravelModel {
    pub fn new(average_speed_kmh: f64) -> Self {
        Self { average_speed_kmh }
    }

    /// Convert distance in km to travel time in whole minutes.
    pub fn minutes_for(&self, km: f64) -> u32 {
        let hours = km / self.average_speed_kmh;
        (hours * 60.0).round() as u32
    }
}

/// Calculate haversine distance between two waypoints in kilometers.
pub fn distance_between(a: &Waypoint, b: &Waypoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total distance along the waypoints in the given order, rounded to
/// 2 decimal places.
///
/// Fewer than two waypoints have no extent and yield 0.
pub fn route_distance(waypoints: &[Waypoint]) -> f64 {
    if waypoints.len() < 2 {
        return 0.0;
    }

    let total: f64 = waypoints
        .windows(2)
        .map(|pair| distance_between(&pair[0], &pair[1]))
        .sum();

    round2(total)
}

/// Estimated travel time in minutes at the default average speed.
pub fn estimate_time(distance_km: f64) -> u32 {
    TravelModel::default().minutes_for(distance_km)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
