use std::env;
use std::fs;
use std::net::SocketAddr;

use crate::{
    entities::TollZones,
    error::{config_error, Error},
};

pub const DEFAULT_FUEL_PRICE_PER_GALLON: f64 = 2.972;
pub const DEFAULT_MILES_PER_GALLON: f64 = 25.0;
pub const DEFAULT_MAX_INTERVALS: usize = 100;

#[derive(Clone, Debug)]
pub struct Config {
    pub osrm_scheme: String,
    pub osrm_api_base: String,
    pub bind_addr: SocketAddr,
    pub toll_zones: TollZones,
    pub fuel_price_per_gallon: f64,
    pub miles_per_gallon: f64,
    pub max_intervals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osrm_scheme: "http".into(),
            osrm_api_base: "router.project-osrm.org".into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            toll_zones: TollZones::nyc(),
            fuel_price_per_gallon: DEFAULT_FUEL_PRICE_PER_GALLON,
            miles_per_gallon: DEFAULT_MILES_PER_GALLON,
            max_intervals: DEFAULT_MAX_INTERVALS,
        }
    }
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Some(scheme) = optional_var("OSRM_SCHEME")? {
            config.osrm_scheme = scheme;
        }
        if let Some(base) = optional_var("OSRM_API_BASE")? {
            config.osrm_api_base = base;
        }
        if let Some(addr) = optional_var("BIND_ADDR")? {
            config.bind_addr = addr.parse::<SocketAddr>().map_err(config_error)?;
        }
        if let Some(path) = optional_var("TOLL_ZONES_PATH")? {
            config.toll_zones = load_toll_zones(&path)?;
        }
        if let Some(price) = optional_var("FUEL_PRICE_PER_GALLON")? {
            config.fuel_price_per_gallon = price.parse::<f64>().map_err(config_error)?;
        }
        if let Some(mpg) = optional_var("MILES_PER_GALLON")? {
            config.miles_per_gallon = mpg.parse::<f64>().map_err(config_error)?;
        }
        if let Some(max) = optional_var("MAX_INTERVALS")? {
            config.max_intervals = max.parse::<usize>().map_err(config_error)?;
        }

        if config.toll_zones.is_empty() {
            tracing::warn!("toll zone table is empty, every route will be toll free");
        }

        tracing::info!(
            "routing via {}://{} with {} toll zones",
            config.osrm_scheme,
            config.osrm_api_base,
            config.toll_zones.len()
        );

        Ok(config)
    }
}

fn optional_var(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn load_toll_zones(path: &str) -> Result<TollZones, Error> {
    let raw = fs::read_to_string(path)?;
    let zones: TollZones = serde_json::from_str(&raw)?;

    tracing::info!("loaded {} toll zones from {}", zones.len(), path);

    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TollZone;

    #[test]
    fn defaults_use_nyc_table() {
        let config = Config::default();

        assert_eq!(config.toll_zones, TollZones::nyc());
        assert_eq!(config.miles_per_gallon, 25.0);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.max_intervals, DEFAULT_MAX_INTERVALS);
    }

    #[test]
    fn toll_zones_load_from_file() {
        let path = env::temp_dir().join(format!("toll-zones-{}.json", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            r#"{"BRIDGE": {"lat_min": 1.0, "lat_max": 2.0, "lon_min": 3.0, "lon_max": 4.0, "toll": 9.5}}"#,
        )
        .unwrap();

        let zones = load_toll_zones(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        let expected: TollZones = [("BRIDGE", TollZone::new(1.0, 2.0, 3.0, 4.0, 9.5))]
            .into_iter()
            .collect();
        assert_eq!(zones, expected);
    }

    #[test]
    fn missing_toll_zone_file_is_config_error() {
        let err = load_toll_zones("/nonexistent/toll-zones.json").unwrap_err();

        assert_eq!(err.code, 2);
    }
}
