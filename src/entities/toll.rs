use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollZone {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub toll: f64,
}

impl TollZone {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64, toll: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
            toll,
        }
    }

    // inclusive on every edge
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

/// Iterates in ascending identifier order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TollZones(BTreeMap<String, TollZone>);

impl TollZones {
    pub fn nyc() -> Self {
        [
            ("GWB", TollZone::new(40.85, 40.87, -73.96, -73.93, 16.06)),
            ("HOLLAND_TUNNEL", TollZone::new(40.72, 40.74, -74.02, -74.0, 16.06)),
            ("LINCOLN_TUNNEL", TollZone::new(40.76, 40.78, -74.01, -73.99, 16.06)),
            ("VERRAZZANO", TollZone::new(40.6, 40.62, -74.05, -74.02, 6.94)),
            ("NJ_TPK", TollZone::new(40.65, 40.85, -74.3, -74.1, 7.0)),
            ("GSP", TollZone::new(40.4, 40.9, -74.3, -74.0, 2.0)),
        ]
        .into_iter()
        .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TollZone)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TollZone)> for TollZones {
    fn from_iter<I: IntoIterator<Item = (S, TollZone)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, zone)| (id.into(), zone)).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollEvent {
    pub zone: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub amount: f64,
}

impl TollEvent {
    pub fn new(zone: &str, lat: f64, lon: f64, amount: f64) -> Self {
        Self {
            zone: zone.into(),
            name: display_name(zone),
            lat,
            lon,
            amount,
        }
    }
}

// HOLLAND_TUNNEL -> Holland Tunnel
fn display_name(zone: &str) -> String {
    zone.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TollEstimate {
    pub total: f64,
    pub events: Vec<TollEvent>,
}
