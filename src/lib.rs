//! route-planner core
//!
//! Great-circle statistics for ordered waypoint routes and GeoJSON
//! import/export.

pub mod analytics;
pub mod error;
pub mod geocode;
pub mod geojson_codec;
pub mod haversine;
pub mod traits;
pub mod waypoint;

pub use analytics::{RouteAnalytics, Segment, analyze, analyze_batch};
pub use error::{GeocodeError, RouteError};
pub use geojson_codec::{from_geojson, to_geojson};
pub use haversine::{distance_between, estimate_time, route_distance};
pub use waypoint::{Route, Waypoint};
