use geo_types::LineString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

// GeoJSON order, [longitude, latitude]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    pub fn line_string(&self) -> LineString<f64> {
        LineString::from(self.coordinates.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub token: Uuid,
    pub origin: Coordinates,
    pub destination: Coordinates,
    // meters
    pub distance: f64,
    // seconds
    pub duration: f64,
    pub geometry: RouteGeometry,
}

impl Route {
    pub fn new(
        origin: Coordinates,
        destination: Coordinates,
        distance: f64,
        duration: f64,
        geometry: RouteGeometry,
    ) -> Self {
        Route {
            token: Uuid::new_v4(),
            origin,
            destination,
            distance,
            duration,
            geometry,
        }
    }
}

#[test]
fn geometry_keeps_geojson_axis_order() {
    let geometry: RouteGeometry =
        serde_json::from_str(r#"{"type": "LineString", "coordinates": [[-73.945, 40.86], [-74.01, 40.73]]}"#)
            .unwrap();

    let line = geometry.line_string();
    let first = line.0[0];
    assert_eq!(first.x, -73.945);
    assert_eq!(first.y, 40.86);
    assert_eq!(line.0.len(), 2);
}
