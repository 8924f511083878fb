//! Route analytics derived on demand from a waypoint list.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::haversine::{TravelModel, distance_between, estimate_time, round2, route_distance};
use crate::waypoint::Waypoint;

/// Ephemeral statistics for a waypoint sequence. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalytics {
    /// Total distance in kilometers, rounded to 2 decimals.
    pub total_distance: f64,
    /// Estimated travel time in minutes.
    pub estimated_time: u32,
    pub waypoint_count: usize,
    /// Rounded total divided by the number of segments; 0 below two waypoints.
    pub avg_distance_between_waypoints: f64,
}

/// One leg between consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Index of the starting waypoint.
    pub from: usize,
    /// Index of the ending waypoint.
    pub to: usize,
    /// Unrounded haversine distance in kilometers.
    pub distance_km: f64,
    pub estimated_minutes: u32,
}

/// Computes distance, time and averages for the waypoints in order.
pub fn analyze(waypoints: &[Waypoint]) -> RouteAnalytics {
    let total_distance = route_distance(waypoints);
    let waypoint_count = waypoints.len();

    // The average is taken over the already rounded total.
    let avg_distance_between_waypoints = if waypoint_count > 1 {
        round2(total_distance / (waypoint_count - 1) as f64)
    } else {
        0.0
    };

    RouteAnalytics {
        total_distance,
        estimated_time: estimate_time(total_distance),
        waypoint_count,
        avg_distance_between_waypoints,
    }
}

/// Analyzes many independent waypoint lists in parallel.
///
/// Output order matches input order.
pub fn analyze_batch(routes: &[Vec<Waypoint>]) -> Vec<RouteAnalytics> {
    routes.par_iter().map(|waypoints| analyze(waypoints)).collect()
}

/// Per-leg breakdown of the route using the default travel model.
pub fn segments(waypoints: &[Waypoint]) -> Vec<Segment> {
    segments_with(waypoints, &TravelModel::default())
}

/// Per-leg breakdown of the route using the given travel model.
pub fn segments_with(waypoints: &[Waypoint], model: &TravelModel) -> Vec<Segment> {
    waypoints
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let distance_km = distance_between(&pair[0], &pair[1]);
            Segment {
                from: i,
                to: i + 1,
                distance_km,
                estimated_minutes: model.minutes_for(distance_km),
            }
        })
        .collect()
}

/// Formats minutes as `"1h 5m"`, or `"45m"` below an hour.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stops() -> Vec<Waypoint> {
        vec![
            Waypoint::new(40.0, -74.0),
            Waypoint::new(40.1, -74.0),
            Waypoint::new(40.1, -74.1),
        ]
    }

    #[test]
    fn test_analyze_three_stops() {
        let analytics = analyze(&three_stops());
        assert_eq!(analytics.total_distance, 19.63);
        assert_eq!(analytics.estimated_time, 24);
        assert_eq!(analytics.waypoint_count, 3);
        // 19.63 / 2 segments
        assert_eq!(analytics.avg_distance_between_waypoints, 9.82);
    }

    #[test]
    fn test_analyze_single_waypoint() {
        let analytics = analyze(&[Waypoint::new(51.5, -0.12)]);
        assert_eq!(analytics.total_distance, 0.0);
        assert_eq!(analytics.estimated_time, 0);
        assert_eq!(analytics.waypoint_count, 1);
        assert_eq!(analytics.avg_distance_between_waypoints, 0.0);
    }

    #[test]
    fn test_analyze_empty() {
        let analytics = analyze(&[]);
        assert_eq!(analytics.waypoint_count, 0);
        assert_eq!(analytics.avg_distance_between_waypoints, 0.0);
    }

    #[test]
    fn test_segments() {
        let legs = segments(&three_stops());
        assert_eq!(legs.len(), 2);
        assert_eq!((legs[0].from, legs[0].to), (0, 1));
        assert_eq!((legs[1].from, legs[1].to), (1, 2));
        assert!((legs[0].distance_km - 11.1195).abs() < 0.001);
        assert!((legs[1].distance_km - 8.5055).abs() < 0.001);
        assert_eq!(legs[0].estimated_minutes, 13);
        assert_eq!(legs[1].estimated_minutes, 10);
    }

    #[test]
    fn test_segments_with_custom_speed() {
        // 100 km/h halves the default minutes.
        let model = TravelModel::new(100.0);
        let legs = segments_with(&three_stops(), &model);
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].estimated_minutes, 7);
        assert_eq!(legs[1].estimated_minutes, 5);
        assert_eq!(legs[0].distance_km, segments(&three_stops())[0].distance_km);
    }

    #[test]
    fn test_segments_too_short() {
        assert!(segments(&[]).is_empty());
        assert!(segments(&[Waypoint::new(0.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_analyze_batch_preserves_order() {
        let batch = vec![three_stops(), vec![], three_stops()[..2].to_vec()];
        let results = analyze_batch(&batch);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], analyze(&batch[0]));
        assert_eq!(results[1].waypoint_count, 0);
        assert_eq!(results[2].total_distance, 11.12);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn test_serialize_camel_case() {
        let value = serde_json::to_value(analyze(&three_stops())).unwrap();
        assert_eq!(value["waypointCount"], 3);
        assert_eq!(value["avgDistanceBetweenWaypoints"], 9.82);
    }
}
