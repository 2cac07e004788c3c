use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, RouteComparison, TripEstimate},
    error::{route_not_found_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_trip(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        avoid_tolls: bool,
    ) -> Result<TripEstimate, Error> {
        let route = self
            .provider
            .driving_route(origin, destination, avoid_tolls)
            .await?
            .ok_or_else(|| route_not_found_error())?;

        self.trip_estimate(route)
    }

    #[tracing::instrument(skip(self))]
    async fn compare_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteComparison, Error> {
        let primary = self.estimate_trip(origin, destination, false).await?;

        let toll_free = match self
            .provider
            .driving_route(origin, destination, true)
            .await?
        {
            Some(route) => Some(self.trip_estimate(route)?),
            None => {
                tracing::info!("no toll free alternative");
                None
            }
        };

        Ok(RouteComparison { primary, toll_free })
    }
}
