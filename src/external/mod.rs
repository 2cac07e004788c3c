pub mod osrm;

use async_trait::async_trait;

use crate::{
    entities::{Coordinates, Route},
    error::Error,
};

pub use osrm::OsrmClient;

// Ok(None) when the provider answers without a route
#[async_trait]
pub trait RouteProvider {
    async fn driving_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        avoid_tolls: bool,
    ) -> Result<Option<Route>, Error>;
}
