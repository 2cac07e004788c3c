use super::Engine;

use async_trait::async_trait;

use crate::{
    api::WaypointAPI,
    engine::sampler,
    entities::Coordinates,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl WaypointAPI for Engine {
    #[tracing::instrument(skip(self, points), fields(points = points.len()))]
    async fn sample_waypoints(
        &self,
        points: Vec<Coordinates>,
        num_intervals: usize,
    ) -> Result<Vec<Coordinates>, Error> {
        if num_intervals > self.config.max_intervals {
            tracing::warn!(
                "{} intervals requested, limit is {}",
                num_intervals,
                self.config.max_intervals
            );
            return Err(invalid_input_error());
        }

        sampler::sample_intervals(&points, num_intervals)
    }

    #[tracing::instrument(skip(self, points), fields(points = points.len()))]
    async fn forecast_points(
        &self,
        points: Vec<Coordinates>,
        samples: usize,
    ) -> Result<Vec<Coordinates>, Error> {
        let stride = sampler::forecast_stride(points.len(), samples);

        sampler::sample_every(&points, stride)
    }
}
