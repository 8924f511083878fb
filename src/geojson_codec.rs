//! GeoJSON conversion for routes.
//!
//! Export writes one LineString feature for the whole path followed by one
//! Point feature per waypoint. Import accepts any FeatureCollection-shaped
//! document and reads waypoints from Point and LineString geometries in
//! document order; other geometries are skipped. GeoJSON positions are
//! `[lng, lat]`, waypoints are `(lat, lng)`.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::RouteError;
use crate::waypoint::{Route, Waypoint};

/// Name given to routes built from an imported document.
pub const IMPORTED_ROUTE_NAME: &str = "Imported Route";

/// Waypoints read from a GeoJSON document plus what was ignored on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonImport {
    pub waypoints: Vec<Waypoint>,
    /// Features with a missing, unparseable or unsupported geometry, or a
    /// Point with fewer than two ordinates.
    pub skipped_features: usize,
    /// LineString positions with fewer than two ordinates.
    pub skipped_positions: usize,
}

/// Converts a route into a FeatureCollection.
pub fn to_geojson(route: &Route) -> FeatureCollection {
    let waypoints = route.waypoints();
    let mut features = Vec::with_capacity(waypoints.len() + 1);

    let line = waypoints.iter().map(position).collect();
    features.push(feature(
        Value::LineString(line),
        properties([
            ("name", route.name().into()),
            ("totalDistance", route.total_distance().into()),
            ("estimatedTime", route.estimated_time().into()),
        ]),
    ));

    features.extend(waypoints.iter().enumerate().map(|(i, waypoint)| {
        let name = if waypoint.name.is_empty() {
            format!("Waypoint {}", i + 1)
        } else {
            waypoint.name.clone()
        };
        feature(
            Value::Point(position(waypoint)),
            properties([("name", name.into()), ("order", (i + 1).into())]),
        )
    }));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes the exported FeatureCollection to a JSON string.
pub fn to_geojson_string(route: &Route) -> String {
    GeoJson::from(to_geojson(route)).to_string()
}

/// Download file name for an exported route.
pub fn export_file_name(route_id: &str) -> String {
    format!("route-{}.geojson", route_id)
}

/// Extracts waypoints from a GeoJSON document.
///
/// Fails with [`RouteError::InvalidFormat`] when `doc` has no `features`
/// array and with [`RouteError::NoWaypointsFound`] when nothing usable was
/// found. Skipped content is not reported; see [`from_geojson_with_report`].
pub fn from_geojson(doc: &JsonValue) -> Result<Vec<Waypoint>, RouteError> {
    extract(doc)?.finish().map(|import| import.waypoints)
}

/// Same as [`from_geojson`], also reporting and logging how much input was
/// ignored.
pub fn from_geojson_with_report(doc: &JsonValue) -> Result<GeoJsonImport, RouteError> {
    let extractor = extract(doc)?;

    if extractor.skipped_features > 0 || extractor.skipped_positions > 0 {
        warn!(
            skipped_features = extractor.skipped_features,
            skipped_positions = extractor.skipped_positions,
            "ignored GeoJSON content without usable Point or LineString geometry"
        );
    }

    let import = extractor.finish()?;
    debug!(waypoints = import.waypoints.len(), "extracted waypoints from GeoJSON");
    Ok(import)
}

/// Extracts waypoints from an already parsed FeatureCollection.
pub fn from_feature_collection(
    collection: &FeatureCollection,
) -> Result<Vec<Waypoint>, RouteError> {
    let mut extractor = Extractor::default();
    for feature in &collection.features {
        let name = waypoint_name(feature.property("name"));
        let geometry = feature.geometry.as_ref().map(|g| g.value.clone());
        extractor.feature(geometry, &name);
    }

    extractor.finish().map(|import| import.waypoints)
}

/// Parses GeoJSON text, as read from an uploaded file.
pub fn parse_geojson(text: &str) -> Result<Vec<Waypoint>, RouteError> {
    let doc: JsonValue =
        serde_json::from_str(text).map_err(|err| RouteError::InvalidFormat(err.to_string()))?;
    from_geojson(&doc)
}

/// Builds a complete route from a GeoJSON document.
///
/// Totals are derived from the extracted waypoints. `name` falls back to
/// [`IMPORTED_ROUTE_NAME`].
pub fn import_route(doc: &JsonValue, name: Option<&str>) -> Result<Route, RouteError> {
    let waypoints = from_geojson(doc)?;
    let name = name.filter(|n| !n.is_empty()).unwrap_or(IMPORTED_ROUTE_NAME);
    Ok(Route::new(name, waypoints))
}

fn extract(doc: &JsonValue) -> Result<Extractor, RouteError> {
    let features = doc
        .get("features")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| RouteError::InvalidFormat("missing features array".to_string()))?;

    let mut extractor = Extractor::default();
    for feature in features {
        let geometry = feature
            .get("geometry")
            .filter(|g| !g.is_null())
            .and_then(|g| Geometry::deserialize(g).ok());
        let name = waypoint_name(feature.get("properties").and_then(|p| p.get("name")));
        extractor.feature(geometry.map(|g| g.value), &name);
    }

    Ok(extractor)
}

/// Point name from a `name` property. Scalars are stringified; empty
/// strings, `false`, `0`, `null` and containers give an unnamed waypoint.
fn waypoint_name(value: Option<&JsonValue>) -> String {
    match value {
        Some(JsonValue::String(name)) => name.clone(),
        Some(JsonValue::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(JsonValue::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

#[derive(Default)]
struct Extractor {
    waypoints: Vec<Waypoint>,
    skipped_features: usize,
    skipped_positions: usize,
}

impl Extractor {
    fn feature(&mut self, geometry: Option<Value>, name: &str) {
        match geometry {
            Some(Value::Point(pos)) => match waypoint_at(&pos, name) {
                Some(waypoint) => self.waypoints.push(waypoint),
                None => self.skipped_features += 1,
            },
            Some(Value::LineString(line)) => {
                for pos in &line {
                    match waypoint_at(pos, "") {
                        Some(waypoint) => self.waypoints.push(waypoint),
                        None => self.skipped_positions += 1,
                    }
                }
            }
            _ => self.skipped_features += 1,
        }
    }

    fn finish(self) -> Result<GeoJsonImport, RouteError> {
        if self.waypoints.is_empty() {
            return Err(RouteError::NoWaypointsFound);
        }

        Ok(GeoJsonImport {
            waypoints: self.waypoints,
            skipped_features: self.skipped_features,
            skipped_positions: self.skipped_positions,
        })
    }
}

fn waypoint_at(pos: &[f64], name: &str) -> Option<Waypoint> {
    match pos {
        [lng, lat, ..] => Some(Waypoint::named(*lat, *lng, name)),
        _ => None,
    }
}

fn position(waypoint: &Waypoint) -> Vec<f64> {
    vec![waypoint.lng, waypoint.lat]
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn properties<const N: usize>(pairs: [(&str, JsonValue); N]) -> JsonObject {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
