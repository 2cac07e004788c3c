use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, WaypointAPI};
use crate::entities::Coordinates;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct IntervalParams {
    points: Vec<Coordinates>,
    num_intervals: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ForecastParams {
    points: Vec<Coordinates>,
    #[serde(default = "default_forecast_samples")]
    samples: usize,
}

fn default_forecast_samples() -> usize {
    5
}

pub async fn intervals(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<IntervalParams>,
) -> Result<Json<Vec<Coordinates>>, Error> {
    let waypoints = api
        .sample_waypoints(params.points, params.num_intervals)
        .await?;

    Ok(waypoints.into())
}

pub async fn forecast(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<ForecastParams>,
) -> Result<Json<Vec<Coordinates>>, Error> {
    let points = api.forecast_points(params.points, params.samples).await?;

    Ok(points.into())
}
