use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, RouteComparison, RouteGeometry, TollEstimate, TripEstimate};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn estimate_trip(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        avoid_tolls: bool,
    ) -> Result<TripEstimate, Error>;
    async fn compare_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteComparison, Error>;
}

#[async_trait]
pub trait TollAPI {
    async fn estimate_tolls(&self, geometry: RouteGeometry) -> Result<TollEstimate, Error>;
}

#[async_trait]
pub trait WaypointAPI {
    async fn sample_waypoints(
        &self,
        points: Vec<Coordinates>,
        num_intervals: usize,
    ) -> Result<Vec<Coordinates>, Error>;
    async fn forecast_points(
        &self,
        points: Vec<Coordinates>,
        samples: usize,
    ) -> Result<Vec<Coordinates>, Error>;
}

pub trait API: RouteAPI + TollAPI + WaypointAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
