//! Seams to external collaborators.
//!
//! The route engine itself is pure; anything that talks to the outside world
//! sits behind one of these traits so callers can swap in their own backend.

use crate::error::GeocodeError;
use crate::waypoint::Waypoint;

/// Resolves a free-text place query to a waypoint.
pub trait Geocoder {
    /// Returns the best match for `query`, or `None` when nothing matched.
    fn search(&self, query: &str) -> Result<Option<Waypoint>, GeocodeError>;
}
