pub mod fuel;
pub mod geodesy;
pub mod sampler;
pub mod tolls;

mod route_api;
mod toll_api;
mod waypoint_api;

use crate::{
    api::API,
    config::Config,
    entities::{Route, TripEstimate, METERS_PER_MILE},
    error::Error,
    external::{OsrmClient, RouteProvider},
};

type DynProvider = Box<dyn RouteProvider + Send + Sync>;

pub struct Engine {
    config: Config,
    provider: DynProvider,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: Config) -> Self {
        let provider = Box::new(OsrmClient::new(&config));

        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: Config, provider: DynProvider) -> Self {
        Self { config, provider }
    }

    #[tracing::instrument(skip_all, fields(route = %route.token))]
    fn trip_estimate(&self, route: Route) -> Result<TripEstimate, Error> {
        let tolls = tolls::estimate_tolls(&route.geometry.line_string(), &self.config.toll_zones);
        let fuel = fuel::estimate_fuel(
            route.distance / METERS_PER_MILE,
            self.config.miles_per_gallon,
            self.config.fuel_price_per_gallon,
        )?;

        let estimate = TripEstimate::new(route, fuel, tolls);

        tracing::info!(
            "estimated {:.2} mi, tolls ${:.2}, total ${:.2}",
            estimate.distance_miles,
            estimate.tolls.total,
            estimate.total_cost
        );

        Ok(estimate)
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::{
        entities::{Coordinates, Route, RouteGeometry},
        error::Error,
        external::RouteProvider,
    };

    // `toll_free` answers requests that avoid tolls
    pub struct StubProvider {
        pub route: Option<Vec<[f64; 2]>>,
        pub toll_free: Option<Vec<[f64; 2]>>,
        pub distance: f64,
    }

    #[async_trait]
    impl RouteProvider for StubProvider {
        async fn driving_route(
            &self,
            origin: Coordinates,
            destination: Coordinates,
            avoid_tolls: bool,
        ) -> Result<Option<Route>, Error> {
            let coordinates = match avoid_tolls {
                false => self.route.clone(),
                true => self.toll_free.clone(),
            };

            Ok(coordinates.map(|coordinates| {
                Route::new(
                    origin,
                    destination,
                    self.distance,
                    1800.0,
                    RouteGeometry { coordinates },
                )
            }))
        }
    }
}
