use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lng, coordinates.lat)
    }
}

#[test]
fn coordinates_axis_order() {
    let coordinates = Coordinates::new(40.86, -73.945);

    let path: String = coordinates.into();
    assert_eq!(path, "-73.945,40.86");
}
