use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, RouteAPI};
use crate::entities::{Coordinates, RouteComparison, TripEstimate};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    origin: Coordinates,
    destination: Coordinates,
    #[serde(default)]
    avoid_tolls: bool,
}

#[derive(Serialize, Deserialize)]
pub struct CompareParams {
    origin: Coordinates,
    destination: Coordinates,
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<TripEstimate>, Error> {
    let estimate = api
        .estimate_trip(params.origin, params.destination, params.avoid_tolls)
        .await?;

    Ok(estimate.into())
}

pub async fn compare(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CompareParams>,
) -> Result<Json<RouteComparison>, Error> {
    let comparison = api
        .compare_routes(params.origin, params.destination)
        .await?;

    Ok(comparison.into())
}
