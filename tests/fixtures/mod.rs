//! Test fixtures for route-planner.
//!
//! Provides realistic test data:
//! - Real New York / New Jersey harbor locations (from OpenStreetMap)
//! - Builders for waypoint lists

pub mod nyc_locations;

pub use nyc_locations::*;
