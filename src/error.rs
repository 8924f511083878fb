//! Error types for route import and geocoding.

/// Failures reported by route construction and the GeoJSON codec.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid GeoJSON format: {0}")]
    InvalidFormat(String),

    #[error("No valid waypoints found in GeoJSON")]
    NoWaypointsFound,

    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Failures reported by a geocoding backend.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),
}
