use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::{Coordinates, Route, RouteGeometry},
    error::{invalid_input_error, upstream_error, Error},
    external::RouteProvider,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: RouteGeometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Clone, Debug)]
pub struct OsrmClient {
    client: reqwest::Client,
    scheme: String,
    api_base: String,
}

impl OsrmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            scheme: config.osrm_scheme.clone(),
            api_base: config.osrm_api_base.clone(),
        }
    }

    fn route_url(&self, origin: Coordinates, destination: Coordinates) -> String {
        let origin: String = origin.into();
        let destination: String = destination.into();

        format!(
            "{}://{}/route/v1/driving/{};{}",
            self.scheme, self.api_base, origin, destination
        )
    }
}

fn first_route(
    data: Response,
    origin: Coordinates,
    destination: Coordinates,
) -> Result<Option<Route>, Error> {
    match data.code.as_str() {
        "Ok" => {}
        "NoRoute" | "NoSegment" => return Ok(None),
        "InvalidQuery" | "InvalidValue" | "InvalidOptions" => return Err(invalid_input_error()),
        other => {
            tracing::warn!("osrm responded with {}", other);
            return Err(upstream_error());
        }
    }

    Ok(data.routes.into_iter().next().map(|route| {
        Route::new(
            origin,
            destination,
            route.distance,
            route.duration,
            route.geometry,
        )
    }))
}

#[async_trait]
impl RouteProvider for OsrmClient {
    #[tracing::instrument(skip(self))]
    async fn driving_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        avoid_tolls: bool,
    ) -> Result<Option<Route>, Error> {
        let mut request = self
            .client
            .get(self.route_url(origin, destination))
            .query(&[("overview", "full")])
            .query(&[("geometries", "geojson")])
            .query(&[("alternatives", "false")])
            .query(&[("steps", "false")]);

        if avoid_tolls {
            request = request.query(&[("exclude", "toll")]);
        }

        let res = request.send().await?;

        let status_code = res.status().as_u16();

        // OSRM reports NoRoute with a 400 and a JSON body
        if status_code == 400 {
            let data: Response = res.json().await?;
            return first_route(data, origin, destination);
        } else if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        first_route(data, origin, destination)
    }
}
